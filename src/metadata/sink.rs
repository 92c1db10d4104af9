//! Destinos de presentación para las líneas de metadata.

use super::flatten::{DisplayLine, flatten_lines};
use super::report::ExtractionResult;
use console::style;

/// Superficie donde se escriben las líneas ya aplanadas.
pub trait DisplaySink {
    fn clear(&mut self);
    fn write_line(&mut self, line: &DisplayLine);
}

/// Limpia el destino y escribe el resultado completo.
pub fn render(result: &ExtractionResult, sink: &mut dyn DisplaySink) {
    sink.clear();
    for line in flatten_lines(result) {
        sink.write_line(&line);
    }
}

/// Imprime en la terminal con el estilo de la aplicación.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl DisplaySink for ConsoleSink {
    fn clear(&mut self) {
        println!();
    }

    fn write_line(&mut self, line: &DisplayLine) {
        match line {
            DisplayLine::Header(_) => println!("{}", style(line).cyan().bold()),
            DisplayLine::Entry { key, value } => {
                println!("  {}: {}", style(key).cyan(), style(value).white());
            }
            DisplayLine::Value(value) => println!("  {value}"),
            DisplayLine::Error(message) => println!("  {}", style(message).red()),
            DisplayLine::Blank => println!(),
            DisplayLine::Fallback => println!("{}", style(line).dim()),
        }
    }
}

/// Conserva las líneas en memoria como texto plano.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub lines: Vec<String>,
}

impl DisplaySink for MemorySink {
    fn clear(&mut self) {
        self.lines.clear();
    }

    fn write_line(&mut self, line: &DisplayLine) {
        self.lines.push(line.to_string());
    }
}

use crate::ui;
use console::style;
use metadata_extractor::extractors::{ExtractOptions, extract_with};
use metadata_extractor::metadata::{DisplayLine, DisplaySink, render};
use std::env;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub fn run(sink: &mut dyn DisplaySink) -> Result<(), String> {
    let state =
        AppState::new().map_err(|error| format!("No se pudo inicializar el extractor: {error}"))?;

    ui::render_header();
    ui::render_file_input_hint();

    let mut input = String::new();
    loop {
        match read_user_input(&mut input, &state.current_dir) {
            Ok(None) => {
                println!("\n{}", style("Fin de la entrada. ¡Hasta luego!").dim());
                break;
            }
            Ok(Some(line)) => match handle_input(&state, &line, sink) {
                Ok(ActionResult::Exit) => {
                    println!("{}", style("Hasta luego!").dim());
                    break;
                }
                Ok(ActionResult::Help) => ui::render_help(),
                Ok(ActionResult::None) | Ok(ActionResult::MetadataShown) => {}
                Err(message) => eprintln!("{message}"),
            },
            Err(error) => {
                eprintln!("Error al leer la entrada: {error}");
            }
        }
    }

    Ok(())
}

struct AppState {
    current_dir: PathBuf,
    options: ExtractOptions,
}

impl AppState {
    fn new() -> io::Result<Self> {
        Ok(Self {
            current_dir: env::current_dir()?,
            options: ExtractOptions::default(),
        })
    }

    fn resolve_path(&self, input: &str) -> PathBuf {
        let candidate = Path::new(input);
        if candidate.is_absolute() {
            candidate.to_path_buf()
        } else {
            self.current_dir.join(candidate)
        }
    }
}

#[derive(Debug, Eq, PartialEq)]
enum ActionResult {
    None,
    Exit,
    Help,
    MetadataShown,
}

fn matches_command(input: &str, aliases: &[&str]) -> bool {
    aliases
        .iter()
        .any(|alias| input.eq_ignore_ascii_case(alias))
}

fn handle_input(
    state: &AppState,
    raw_input: &str,
    sink: &mut dyn DisplaySink,
) -> Result<ActionResult, String> {
    let trimmed = raw_input.trim();
    if trimmed.is_empty() {
        return Ok(ActionResult::None);
    }

    if matches_command(trimmed, &["exit", "salir"]) {
        return Ok(ActionResult::Exit);
    }

    if matches_command(trimmed, &["ayuda", "help"]) {
        return Ok(ActionResult::Help);
    }

    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let command = parts.next().unwrap_or("");
    if command.eq_ignore_ascii_case("json") {
        let remainder = parts.next().map(str::trim).unwrap_or("");
        if remainder.is_empty() {
            return Err("Debes indicar la ruta del archivo que deseas exportar.".to_string());
        }
        show_json(state, remainder, sink)?;
        return Ok(ActionResult::MetadataShown);
    }

    let path = state.resolve_path(trimmed);
    let result = extract_with(&path, &state.options);
    render(&result, sink);
    Ok(ActionResult::MetadataShown)
}

fn show_json(state: &AppState, input: &str, sink: &mut dyn DisplaySink) -> Result<(), String> {
    let path = state.resolve_path(input);
    let result = extract_with(&path, &state.options);
    let json = serde_json::to_string_pretty(&result)
        .map_err(|err| format!("No se pudo serializar JSON: {err}"))?;

    sink.clear();
    for line in json.lines() {
        sink.write_line(&DisplayLine::Value(line.to_string()));
    }
    Ok(())
}

fn read_user_input(buffer: &mut String, current_dir: &Path) -> io::Result<Option<String>> {
    print!(
        "{} {} ",
        style("Ubicación").bold().cyan(),
        style(current_dir.display()).dim()
    );
    print!("{} ", style("›").cyan());
    io::stdout().flush()?;

    buffer.clear();
    let bytes_read = io::stdin().read_line(buffer)?;
    if bytes_read == 0 {
        return Ok(None);
    }

    Ok(Some(buffer.trim_end().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use metadata_extractor::extractors::UNSUPPORTED_MESSAGE;
    use metadata_extractor::metadata::MemorySink;
    use tempfile::tempdir;

    fn state_in(dir: &Path) -> AppState {
        AppState {
            current_dir: dir.to_path_buf(),
            options: ExtractOptions::default(),
        }
    }

    #[test]
    fn commands_are_case_insensitive() -> Result<(), String> {
        let state = state_in(Path::new("/"));
        let mut sink = MemorySink::default();

        assert_eq!(handle_input(&state, "SALIR", &mut sink)?, ActionResult::Exit);
        assert_eq!(handle_input(&state, "Help", &mut sink)?, ActionResult::Help);
        assert_eq!(handle_input(&state, "   ", &mut sink)?, ActionResult::None);
        assert!(sink.lines.is_empty());
        Ok(())
    }

    #[test]
    fn relative_paths_resolve_against_current_dir() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        std::fs::write(dir.path().join("nota.txt"), "hola")?;
        let state = state_in(dir.path());
        let mut sink = MemorySink::default();

        handle_input(&state, "nota.txt", &mut sink)?;

        assert_eq!(
            sink.lines,
            vec!["Codificación:", "ASCII", "", "Contenido:", "hola", ""]
        );
        Ok(())
    }

    #[test]
    fn unsupported_file_shows_single_error() -> Result<(), String> {
        let state = state_in(Path::new("/"));
        let mut sink = MemorySink::default();

        handle_input(&state, "/tmp/archivo.xyz", &mut sink)?;

        assert_eq!(sink.lines, vec!["Error:", UNSUPPORTED_MESSAGE, ""]);
        Ok(())
    }

    #[test]
    fn json_command_requires_a_path() {
        let state = state_in(Path::new("/"));
        let mut sink = MemorySink::default();

        assert!(handle_input(&state, "json", &mut sink).is_err());
    }

    #[test]
    fn json_command_serializes_result() -> Result<(), Box<dyn std::error::Error>> {
        let state = state_in(Path::new("/"));
        let mut sink = MemorySink::default();

        handle_input(&state, "json /tmp/archivo.xyz", &mut sink)?;

        let value: serde_json::Value = serde_json::from_str(&sink.lines.join("\n"))?;
        assert_eq!(value["categories"][0]["name"], "Error");
        Ok(())
    }
}

use console::style;

const HEADER_WIDTH: usize = 74;

pub fn render_header() {
    let border = "─".repeat(HEADER_WIDTH - 2);
    println!("\n{}", style(format!("┌{}┐", border)).cyan());
    println!(
        "{}",
        style(format!(
            "│ {:^inner_width$} │",
            "▸ Extractor de Metadata ◂",
            inner_width = HEADER_WIDTH - 4
        ))
        .cyan()
        .bold()
    );
    println!("{}\n", style(format!("└{}┘", border)).cyan());
}

pub fn render_file_input_hint() {
    let hint_lines = [
        "┌─ Puedes ingresar:",
        "│   • Una imagen (.jpg, .jpeg, .png, .tiff)",
        "│   • Un audio (.mp3, .flac, .wav)",
        "│   • Un texto (.txt), un PDF (.pdf) o un documento Word (.docx)",
        "│   • `json <ruta>` para ver el resultado en JSON",
        "└─ Escribe 'ayuda' para ver los comandos o 'salir' para terminar.",
    ];

    for line in hint_lines.iter() {
        println!("{}", style(line).cyan().dim());
    }

    println!();
}

pub fn render_help() {
    let help_lines = [
        ("<ruta>", "Muestra la metadata del archivo"),
        ("json <ruta>", "Muestra la metadata en formato JSON"),
        ("ayuda | help", "Muestra esta ayuda"),
        ("salir | exit", "Termina la sesión"),
    ];

    println!();
    for (command, description) in help_lines {
        println!(
            "  {} {} {}",
            style(format!("{command:<14}")).cyan().bold(),
            style("→").dim(),
            description
        );
    }
    println!();
}

use std::{env, fs, path::PathBuf, process, process::Command, rc::Rc};

use lazylang::{
    codegen::codegen::generate, display_error, lexer::lexer::tokenize, parser::parser::parse,
};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: lazylang <file.lazy>");
        process::exit(2);
    }

    let input_path = PathBuf::from(&args[1]);
    let file_name = input_path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| args[1].clone());

    let source = match fs::read_to_string(&input_path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Failed to read {}: {}", input_path.display(), error);
            process::exit(2);
        }
    };

    let tokens = tokenize(source.clone(), Some(file_name.clone()));
    let (program, errors) = parse(tokens, Rc::new(file_name));

    if !errors.is_empty() {
        for error in &errors {
            display_error(error, &input_path, &source);
        }
        process::exit(1);
    }

    let go_source = generate(&program);

    let output_path = input_path.with_extension("go");
    if let Err(error) = fs::write(&output_path, &go_source) {
        eprintln!("Failed to write {}: {}", output_path.display(), error);
        process::exit(2);
    }

    println!("Compiled {} to {}", input_path.display(), output_path.display());

    // stdout/stderr are inherited, so the generated program's output is
    // forwarded as-is
    let status = Command::new("go").arg("run").arg(&output_path).status();

    match status {
        Ok(status) if status.success() => {}
        Ok(status) => process::exit(status.code().unwrap_or(1)),
        Err(error) => {
            eprintln!("Failed to run the go toolchain: {}", error);
            process::exit(2);
        }
    }
}

use krill::flags::Flags;
use krill::shell::Shell;
use std::env;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();
    let prog_name = args
        .first()
        .map(String::as_str)
        .unwrap_or("krill")
        .to_string();

    let mut flags = Flags::new();
    if let Err(e) = flags.parse(args.get(1..).unwrap_or_default()) {
        eprintln!("{}: {}", prog_name, e);
        process::exit(2);
    }

    if flags.is_set("help") {
        flags.print_help();
        return;
    }

    if flags.is_set("version") {
        println!("krill {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    let mut shell = match Shell::new(prog_name.clone(), flags) {
        Ok(shell) => shell,
        Err(e) => {
            eprintln!("{}: {}", prog_name, e);
            process::exit(1);
        }
    };

    match shell.run() {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("{}: {}", prog_name, e);
            process::exit(1);
        }
    }
}

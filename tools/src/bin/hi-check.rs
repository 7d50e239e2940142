use std::{env, error::Error, path::Path, process};

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    let path = match args.next() {
        Some(path) => path,
        None => {
            eprintln!("usage: hi-check PATH [RUNS]");
            process::exit(2)
        }
    };
    let runs = match args.next() {
        Some(runs) => runs.parse()?,
        None => 1,
    };

    eprintln!("$ {} (x{})", path, runs);
    if let Err(e) = tools::check_repeated(&path, runs) {
        eprintln!("error: {}", e);
        process::exit(1)
    }

    println!("{}", tools::SIZE_HEADER);
    println!("{}", tools::size_row(Path::new(&path))?);

    Ok(())
}

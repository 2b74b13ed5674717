use std::{rc::Rc, time::Instant};

use log::info;

use steinergrid::{helpers, io, routing};

//------------------------------------------------------------------------------------------------//

fn main() -> Result<(), String> {
    // process user-input

    let matches = parse_cmdline();
    match helpers::init_logging(matches.value_of("log").unwrap(), vec![]) {
        Ok(_) => (),
        Err(msg) => return Err(format!("{}", msg)),
    };

    info!("EXECUTE {}", env!("CARGO_PKG_NAME"));

    // parse terminals and build the Hanan grid

    let grid = {
        let now = Instant::now();
        let grid = match io::Parser::parse_and_finalize(matches.value_of("file").unwrap()) {
            Ok(grid) => grid,
            Err(msg) => return Err(format!("{}", msg)),
        };
        info!(
            "Finished parsing in {} seconds ({} µs).",
            now.elapsed().as_secs(),
            now.elapsed().as_micros(),
        );
        info!("{}", grid);
        grid
    };

    // search the optimum tree cost

    let now = Instant::now();
    let cost = routing::factory::max(Rc::new(grid)).get_optimum_cost();
    info!(
        "Finished routing in {} seconds ({} µs).",
        now.elapsed().as_secs(),
        now.elapsed().as_micros(),
    );

    println!("{}", cost);
    Ok(())
}

fn parse_cmdline<'a>() -> clap::ArgMatches<'a> {
    let tmp = &[
        "Sets the logging-level by setting environment-variable 'RUST_LOG'.",
        "The env-variable 'RUST_LOG' has precedence.",
        "It takes values of modules, e.g.",
        "export RUST_LOG='warn,steinergrid=info'",
        "for getting warn's by default, but 'info' about the others",
    ]
    .join("\n");
    let arg_log_level = clap::Arg::with_name("log")
        .long("log")
        .short("l")
        .value_name("FILTER-LEVEL")
        .help(tmp)
        .takes_value(true)
        .required(false)
        .default_value("WARN")
        .possible_values(&vec!["TRACE", "DEBUG", "INFO", "WARN", "ERROR"]);

    let arg_input_file = clap::Arg::with_name("file")
        .value_name("PATH")
        .help("The instance to solve: the number of terminals followed by their coordinates.")
        .takes_value(true)
        .required(true);

    clap::App::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .long_about(
            (&[
                "",
                "This tool takes an instance-file of whitespace-separated integers,",
                "builds the Hanan grid over its terminals, and prints the cost of an",
                "optimum rectilinear Steiner minimum tree connecting them.",
            ]
            .join("\n"))
                .as_ref(),
        )
        .arg(arg_log_level)
        .arg(arg_input_file)
        .get_matches()
}

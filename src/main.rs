use sockaddr_rfc::output::{format_partition, format_rfc_header, partition_json};
use sockaddr_rfc::rfc::global;
use sockaddr_rfc::{if_by_rfc, parse_if_addrs, rfc_table_from_env};
use std::error::Error;
use std::process;

const USAGE: &str = "usage: sockaddr-rfc [--json] <rfc-number> <address>...";

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    if let Err(e) = log4rs::init_file("log4rs.yml", Default::default()) {
        eprintln!("Logging disabled, error initializing log4rs: {e}");
    }
    dotenv::dotenv().ok();
    log::info!("#Start main()");

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let json = match args.iter().position(|a| a == "--json") {
        Some(i) => {
            args.remove(i);
            true
        }
        None => false,
    };
    let Some((rfc, addrs)) = args.split_first() else {
        return Err(USAGE.into());
    };
    let rfc: u32 = rfc
        .parse()
        .map_err(|_| format!("Invalid RFC number {rfc:?}\n{USAGE}"))?;

    // A bad extension is an operator mistake, never run with a partial table.
    let table = match rfc_table_from_env() {
        Ok(table) => table,
        Err(e) => {
            log::error!("Invalid RFC table configuration: {e}");
            eprintln!("fatal: {e}");
            process::exit(2);
        }
    };
    let table = global::install(table)?;

    let if_addrs = parse_if_addrs(addrs)?;
    let (matched, remainder) = if_by_rfc(table, rfc, &if_addrs);
    log::debug!(
        "RFC {rfc}: {} matched, {} remainder",
        matched.len(),
        remainder.len()
    );

    if json {
        println!("{}", partition_json(rfc, &matched, &remainder)?);
    } else {
        println!("{}", format_rfc_header(rfc, table.ranges(rfc)));
        println!("{}", format_partition(&matched, &remainder));
    }

    Ok(())
}

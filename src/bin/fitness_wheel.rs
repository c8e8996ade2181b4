//! Resolves the grammar file and fitness input for a run.
//!
//! Reads `FITNESS_FUNCTION`, `SUITE` and `STRING_MATCH_TARGET` from the
//! environment and prints the resolved `GRAMMAR_FILE` and
//! `FITNESS_FUNC_INPUT`. An unrecognised fitness function exits with
//! status 2 before anything else runs.

use std::process;
use u_gevo::Params;

fn main() {
    env_logger::init();

    let params = match Params::from_env().configure() {
        Ok(params) => params,
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(err.exit_code());
        }
    };

    if let (Some(grammar), Some(input)) = (&params.grammar_file, &params.fitness_func_input) {
        println!("GRAMMAR_FILE={}", grammar.display());
        println!("FITNESS_FUNC_INPUT={input}");
    }
}

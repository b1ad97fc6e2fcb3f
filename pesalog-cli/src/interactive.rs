//! Prompt loop: one notification per line, sentinel `exit`/`quit` to leave.

use anyhow::Result;
use pesalog_core::MessageParser;
use std::io::{self, Write};

use crate::render;

pub fn run(parser: &MessageParser) -> Result<()> {
    println!("Paste one notification per line (type 'exit' to quit).");

    loop {
        print!("message> ");
        io::stdout().flush().ok();

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim();

        if line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit") {
            break;
        }
        if line.is_empty() {
            println!("(nothing entered; paste a notification or type 'exit')");
            continue;
        }

        match parser.parse(line) {
            Ok(record) => render::print_record(&record),
            Err(err) => eprintln!("error: {err}"),
        }
        println!();
    }

    Ok(())
}

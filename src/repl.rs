use std::io::{self, Write};

use abacus_rs::Interpreter;

pub fn start() {
    let mut interpreter = Interpreter::new();

    loop {
        print!(">>");
        io::stdout().flush().unwrap();

        let mut input = String::new();

        let read = io::stdin()
            .read_line(&mut input)
            .expect("Failed to read line");
        if read == 0 {
            break;
        }
        if input.trim().is_empty() {
            continue;
        }

        match interpreter.evaluate_statement(&input) {
            Ok(Some(value)) => println!("{}", value),
            Ok(None) => {}
            Err(err) => println!("error: {}", err),
        }
    }
}

use std::{process::ExitCode, time::Instant};

use scopelex::{
    init_tracing,
    lexer::{classes::LexerConfig, lexer::tokenize_partial},
    render_error,
};

const DEMO_FILE: &str = "demo.toy";

const DEMO_PROGRAM: &str = r#"
	@add(int a, int b){
		return a + b;
	}

	class Person{
		int age
		string name
		@have_birthday(){
			.age+=1;
		}
		@Get_status(){
			return "Person is " + age + " years old";
		}
	}

	@main(){
		Person person = Person(1, "John");
		person.have_birthday();
		print(person.Get_status());
	}
	"#;

fn main() -> ExitCode {
    init_tracing();

    // The demo terminates statements with `;`, which the stock tables lack.
    let config = LexerConfig::default().with_punctuation(';');

    let start = Instant::now();
    let (tokens, result) = tokenize_partial(
        DEMO_PROGRAM.to_string(),
        Some(String::from(DEMO_FILE)),
        &config,
    );

    if let Err(error) = result {
        eprint!("{}", render_error(&error, DEMO_PROGRAM));
        eprintln!("{} tokens scanned before the error", tokens.len());
        return ExitCode::FAILURE;
    }

    for token in &tokens {
        println!("{}", token);
    }

    println!("Tokenized {} tokens in {:?}", tokens.len(), start.elapsed());
    ExitCode::SUCCESS
}

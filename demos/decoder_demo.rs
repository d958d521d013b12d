use rtf_extract::{Decoder, Strategy};

fn main() {
    println!("=== RTF Decoder Demo ===");

    let test_documents = [
        r"{\rtf1 Hello world}",
        r"Hi\'41Bye",
        r"{\b Hi}",
        r"{\rtf1\ansi {\b Bold} and {\i italic} caf\'e9 text}",
        r"{\rtf1 Escaped \{braces\} and C:\\path}",
    ];

    for source in test_documents {
        println!("\nInput: '{}'", source);
        for strategy in [Strategy::Substitute, Strategy::Scan] {
            let lines: Vec<String> = Decoder::new().with_strategy(strategy).decode(source).collect();
            println!("{:?}: {:?}", strategy, lines);
        }
    }
}

use clipp::{print_error, ArgumentParser};

fn main() {
    let mut parser = ArgumentParser::with_description("basic", "Demonstrates basic CLI parsing");
    parser
        .add_option::<String>("-f", "--file", "Input file path", true, None)
        .add_option("-n", "--count", "Number of items", false, Some(10))
        .add_option::<Vec<i32>>("-v", "--values", "List of values", false, None);

    let result = parser.parse_env();

    if !result.success {
        print_error(&result);
        parser.print_usage();
        std::process::exit(1);
    }

    let file: String = parser.get("--file").unwrap_or_default();
    let count: i32 = parser.get("--count").unwrap_or_default();
    let values: Vec<i32> = parser.get("--values").unwrap_or_default();
    println!("File: {file}");
    println!("Count: {count}");
    println!("Values: {values:?}");
}

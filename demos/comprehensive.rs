use clipp::{print_error, ArgumentParser, Parameter};

fn main() {
    let mut parser = ArgumentParser::new("comprehensive")
        .about("Demonstrates various CLI argument types and features")
        .strict(true)
        .enforce_required(true);
    parser
        .add(
            Parameter::<String>::new("-f", "--file")
                .description("Input file path")
                .required(),
        )
        .add(
            Parameter::<i32>::new("-n", "--count")
                .description("Number of items")
                .default(10),
        )
        .add(
            Parameter::<f32>::new("-r", "--rate")
                .description("Processing rate")
                .default(1.0),
        )
        .add(
            Parameter::<f64>::new("-t", "--threshold")
                .description("Threshold value")
                .default(0.5),
        )
        .add(
            Parameter::<bool>::new("-v", "--verbose")
                .description("Enable verbose output")
                .default(false),
        )
        .add(
            Parameter::<Vec<i32>>::new("-i", "--integers")
                .description("List of integers (comma-separated)"),
        )
        .add(
            Parameter::<Vec<String>>::new("-s", "--strings")
                .description("List of strings (comma-separated)"),
        );

    let result = parser.parse_env();

    if !result.success {
        print_error(&result);
        parser.print_usage();
        std::process::exit(1);
    }

    println!("Parsed Arguments:");
    println!("File: {}", parser.get::<String>("--file").unwrap_or_default());
    println!("Count: {}", parser.get::<i32>("--count").unwrap_or_default());
    println!("Rate: {:.2}", parser.get::<f32>("--rate").unwrap_or_default());
    println!(
        "Threshold: {:.4}",
        parser.get::<f64>("--threshold").unwrap_or_default()
    );
    println!("Verbose: {}", parser.get::<bool>("--verbose").unwrap_or_default());

    if let Ok(integers) = parser.get::<Vec<i32>>("--integers") {
        if !integers.is_empty() {
            println!("Integers: {integers:?}");
        }
    }

    if let Ok(strings) = parser.get::<Vec<String>>("--strings") {
        if !strings.is_empty() {
            println!("Strings: {strings:?}");
        }
    }

    println!(
        "\nExample usage: {} -f input.txt -n 5 -r 2.5 -t 0.75 -v true -i 1,2,3,4 -s hello,world,test",
        parser.program()
    );
}

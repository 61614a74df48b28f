use declarg::{boolean, number, string, Definition, Parameter};

fn main() {
    let cli = Definition::new()
        .description("Count the lines of an input file.")
        .example("counter notes.txt --count 10")
        .add(Parameter::positional(string(), "input").help("The file to count."))
        .add(
            Parameter::flag(number().optional(), "count")
                .help("Stop after this many lines.")
                .alias("c"),
        )
        .add(Parameter::flag(boolean().default(false), "dry-run").help("Only print the plan."))
        .build()
        .unwrap();

    let args = cli.parse_env();
    let input: String = args.get_as("input").unwrap();
    let count: Option<u32> = args.get_as("count").unwrap();
    let dry_run: bool = args.get_as("dry-run").unwrap();
    println!("input: {input}, count: {count:?}, dry-run: {dry_run}, rest: {:?}", args.rest());
}

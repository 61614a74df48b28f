use declarg::{boolean, derive::*, number, string, Definition, Parameter};

#[derive(Debug, FromParsedArgs)]
struct Parameters {
    input: String,
    count: Option<u32>,
    #[declarg(rename = "dry-run")]
    dry_run: bool,
    #[declarg(rest)]
    rest: Vec<String>,
}

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
        .unwrap()
        .typed::<Parameters>();

    let parameters = cli.parse_env();
    println!("{parameters:?}");
}

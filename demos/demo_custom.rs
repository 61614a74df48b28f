use declarg::{custom, number, string, Definition, Parameter, RawValue, Value};

fn main() {
    let port = custom("port", |raw| match raw {
        RawValue::Text(text) => text
            .parse::<u16>()
            .map(|port| Value::Number(port as f64))
            .map_err(|_| format!("'{text}' is not a port")),
        RawValue::Flag(_) => Err("expected a port".to_string()),
    });
    let retries = number()
        .default(3)
        .refine("non-negative", "must not be negative", |value| match value {
            Value::Number(n) => *n >= 0.0,
            _ => false,
        });

    let cli = Definition::new()
        .usage_prefix("zscripts")
        .description("Serve a directory over http.")
        .hint("The directory defaults to the current one.")
        .add(Parameter::positional(string().default("."), "directory"))
        .add(Parameter::flag(port.default(8080), "port").alias("p"))
        .add(Parameter::flag(retries, "retries"))
        .build()
        .unwrap();

    let args = cli.parse_env();
    for (name, value) in args.iter() {
        println!("{name}: {value}");
    }
}

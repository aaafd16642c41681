mod scripts;
mod submodules;

fn main() {
    match std::env::args().nth(1).as_deref() {
        Some("cloud") => scripts::cloud::run().unwrap(),
        Some("ice") => scripts::run405::run().unwrap(),
        Some("batch") => scripts::mvd52::run().unwrap(),
        _ => eprintln!("usage: icing-tools <cloud|ice|batch>"),
    }
}

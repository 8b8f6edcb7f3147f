use fancy_description::{AwesomeSauce, FancyDescription};

fn main() {
    let sauce = match std::env::args().nth(1) {
        Some(input) => {
            serde_json::from_reader(std::fs::File::open(input).expect("File not accessible"))
                .expect("Cannot parse the sauce")
        }
        None => AwesomeSauce::new("Hot Pig Sauce", "Pretty Amazing!"),
    };

    println!("{}", sauce.describe_fancy());
    println!("{}", sauce.proclaim_fancy());
}

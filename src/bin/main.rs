use colored::Colorize;
use futures::future::join_all;
use tracing_subscriber::EnvFilter;

use snippets::{
    concatenate, filter_by_rating, get_day_type, get_most_expensive_product, process_value,
    square_async, text_case, Car, Day, Describe, Item, Value, Vehicle, SAMPLE_PRODUCTS,
};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn section(title: &str) {
    println!("\n{}", format!("=== {} ===", title).bold().cyan());
}

fn text_demo() {
    section("Text case");
    println!("format(\"Hello\")        -> {}", text_case::format("Hello", None));
    println!("format(\"Hello\", true)  -> {}", text_case::format("Hello", Some(true)));
    println!("format(\"Hello\", false) -> {}", text_case::format("Hello", Some(false)));
}

fn rating_demo() {
    section("Rating filter");
    let books = vec![
        Item::new("TypeScript Book", 4.5),
        Item::new("Old Manual", 3.2),
        Item::new("Rust Book", 5.0),
    ];
    for item in filter_by_rating(&books) {
        println!("{} ({})", item.title(), item.rating());
    }
}

fn concat_demo() {
    section("Concatenate");
    let numbers: Vec<i32> = concatenate![[1, 2], [3, 4], [5]];
    let words: Vec<&str> = concatenate![["apple"], ["banana", "cherry"]];
    println!("{:?}", numbers);
    println!("{:?}", words);
}

fn vehicle_demo() {
    section("Vehicles");
    let vehicle = Vehicle::new("Honda", 2018);
    let car = Car::new("Toyota", 2020, "Corolla");
    println!("{}", vehicle.get_info());
    println!("{}", car.get_info());
    println!("{}", car.get_model());
    println!("{}", car.describe());
}

fn value_demo() {
    section("Process value");
    for value in [Value::from("hello"), Value::from(10)] {
        println!("{:?} -> {}", value, process_value(&value));
    }
}

fn product_demo() {
    section("Most expensive product");
    match get_most_expensive_product(&SAMPLE_PRODUCTS) {
        Some(product) => match serde_json::to_string(product) {
            Ok(json) => println!("{}", json),
            Err(e) => println!("{}", format!("could not serialize: {}", e).red()),
        },
        None => println!("no products"),
    }
    println!("empty list -> {:?}", get_most_expensive_product(&[]));
}

fn day_demo() {
    section("Day type");
    for day in Day::ALL {
        println!("{:<9} -> {}", day, get_day_type(day));
    }
}

async fn square_demo() {
    section("Delayed square");
    let inputs = [5.0, -1.0, 0.0];
    let results = join_all(inputs.iter().map(|n| square_async(*n))).await;
    for (n, result) in inputs.iter().zip(results) {
        match result {
            Ok(value) => println!("square_async({}) = {}", n, value.to_string().green()),
            Err(e) => println!("square_async({}) failed: {}", n, e.to_string().red()),
        }
    }
}

#[tokio::main]
async fn main() {
    init_logging();

    text_demo();
    rating_demo();
    concat_demo();
    vehicle_demo();
    value_demo();
    product_demo();
    day_demo();
    square_demo().await;
}

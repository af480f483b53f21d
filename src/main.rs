use std::error::Error;
use std::io::{self, Read};

use growable_array::collections::contiguous::DynArray;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Reads whitespace separated integers from stdin, then prints them along with some statistics.
///
/// Set `RUST_LOG=trace` to see every reallocation as the numbers are appended.
fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
        )
        .with_writer(io::stderr)
        .init();

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;

    let mut arr = DynArray::new();
    for token in input.split_whitespace() {
        match token.parse::<i64>() {
            Ok(value) => arr.push(value),
            Err(error) => warn!(token, %error, "skipping input that isn't an integer"),
        }
    }
    debug!(len = arr.len(), cap = arr.cap(), "finished reading input");

    println!("arr = {}", arr);
    println!("size = {}, capacity = {}", arr.len(), arr.cap());
    match arr.checked_sum() {
        Some(sum) => println!("sum = {}", sum),
        None => println!("sum = n/a (overflows an i64)"),
    }
    match arr.average() {
        Ok(average) => println!("average = {}", average),
        Err(error) => println!("average = n/a ({})", error),
    }

    let mut sorted = arr.clone();
    sorted.sort_ascending();
    println!("ascending = {}", sorted);
    sorted.sort_descending();
    println!("descending = {}", sorted);

    // The original is untouched by sorting the copy.
    println!("original = {}", arr);

    Ok(())
}

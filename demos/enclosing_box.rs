// Estimate the area of the intersection of three circles read from stdin,
// sampling from the axis-aligned box that encloses all of them.
//
// Input: nine whitespace-separated numbers, `x y r` for each circle.
// Output: the area estimate from 2,000,000 points.
//
//   $ echo "1 1 1  1.5 2 1.118  2 1.5 1.118" | cargo run --example enclosing_box
use areal::prelude::*;
use std::io::Read;

fn main() {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .expect("failed to read stdin");

    let values: Vec<f64> = input
        .split_whitespace()
        .map(|tok| tok.parse().expect("circle parameters must be numbers"))
        .collect();
    assert_eq!(values.len(), 9, "expected three `x y r` circles");

    let circles: Vec<Circle> = values
        .chunks_exact(3)
        .map(|c| Circle::new(c[0], c[1], c[2]).unwrap())
        .collect();
    let region = CircleIntersection::new(circles).unwrap();

    // the box spans center ± radius over all three circles, so it always
    // contains the intersection
    let rect = region.enclosing_rect().unwrap();

    let mut rng = rand::thread_rng();
    let est = estimate_area(&region, &rect, 2_000_000, &mut rng);

    println!("{:.20}", est);
}

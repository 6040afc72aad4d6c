// This is a simple example showing how to use the petal library
use ndarray::array;
use petal::{predict, Algorithm};

fn main() {
    println!("petal library example");

    let query = array![6.1, 2.8, 4.7, 1.2];
    for algorithm in Algorithm::ALL {
        match predict(algorithm, query.view()) {
            Ok(label) => println!("{} classifies {:?} as {}", algorithm, query, label),
            Err(e) => eprintln!("{} failed: {}", algorithm, e),
        }
    }

    // Contract violations fail loudly instead of corrupting the comparison.
    let short = array![1.0, 2.0];
    if let Err(e) = predict(Algorithm::Knn, short.view()) {
        println!("Short vector rejected: {}", e);
    }

    match "randomForest".parse::<Algorithm>() {
        Ok(algorithm) => println!("Parsed {}", algorithm),
        Err(e) => println!("Unknown name rejected: {}", e),
    }
}

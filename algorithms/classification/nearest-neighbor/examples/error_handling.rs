//! Example demonstrating proper error handling with the nearest-neighbor
//! classifier.
//!
//! This example shows how to handle the error conditions that can occur when
//! building and querying the classifier, replacing panics with proper
//! Result-based error handling.

use ndarray::array;
use nearest_neighbor::{NearestNeighbor, NearestNeighborError};
use petal_helpers::{DataPoint, L2Dist};

fn main() {
    println!("Nearest-Neighbor Classifier Error Handling Examples");
    println!("===================================================");

    // Example 1: Handle an empty reference set
    println!("\n1. Handling an empty reference set:");
    let empty_data: Vec<DataPoint<&str, f64>> = vec![];

    match NearestNeighbor::new(empty_data, L2Dist) {
        Ok(_) => println!("   Classifier created successfully"),
        Err(NearestNeighborError::EmptyReferenceSet) => println!(
            "   ✓ Caught expected error: {}",
            NearestNeighborError::EmptyReferenceSet
        ),
        Err(e) => println!("   ✗ Unexpected error: {}", e),
    }

    // Example 2: Handle a query with the wrong number of features
    println!("\n2. Handling a query with the wrong number of features:");
    let reference = vec![
        DataPoint::new(array![1.0, 1.0], "A"),
        DataPoint::new(array![8.0, 8.0], "B"),
    ];

    match NearestNeighbor::new(reference, L2Dist) {
        Ok(classifier) => {
            let short_query = array![1.0];
            match classifier.predict(short_query.view()) {
                Ok(label) => println!("   Predicted label: {}", label),
                Err(e @ NearestNeighborError::DimensionMismatch { .. }) => {
                    println!("   ✓ Caught expected error: {}", e)
                }
                Err(e) => println!("   ✗ Unexpected error: {}", e),
            }
        }
        Err(e) => println!("   Error creating classifier: {}", e),
    }

    // Example 3: Successful prediction with proper error handling
    println!("\n3. Successful prediction with error handling:");
    let reference = vec![
        DataPoint::new(array![1.0, 1.0], "Class A"),
        DataPoint::new(array![2.0, 2.0], "Class A"),
        DataPoint::new(array![8.0, 8.0], "Class B"),
        DataPoint::new(array![9.0, 8.0], "Class B"),
    ];

    match NearestNeighbor::new(reference, L2Dist) {
        Ok(classifier) => {
            println!("   ✓ Classifier created successfully");

            let test_points = vec![
                (array![2.5, 2.5], "should be Class A"),
                (array![7.5, 8.5], "should be Class B"),
            ];

            for (point, expected) in test_points {
                match classifier.predict(point.view()) {
                    Ok(predicted_label) => {
                        println!(
                            "   ✓ Prediction successful: {} ({})",
                            predicted_label, expected
                        );
                    }
                    Err(e) => {
                        println!("   ✗ Prediction failed: {}", e);
                    }
                }
            }
        }
        Err(e) => println!("   ✗ Failed to create classifier: {}", e),
    }

    // Example 4: Demonstrate error propagation in a function
    println!("\n4. Error propagation in functions:");

    fn classify_with_error_handling() -> Result<String, NearestNeighborError> {
        let reference = vec![
            DataPoint::new(array![1.0], "positive"),
            DataPoint::new(array![-1.0], "negative"),
        ];

        let classifier = NearestNeighbor::new(reference, L2Dist)?;
        let test_point = array![0.5];
        let result = classifier.predict(test_point.view())?;
        Ok(result.to_string())
    }

    match classify_with_error_handling() {
        Ok(result) => println!("   ✓ Classification result: {}", result),
        Err(e) => println!("   ✗ Classification failed: {}", e),
    }

    println!("\n5. Error types and their meanings:");
    println!("   - EmptyReferenceSet: cannot build a classifier without reference samples");
    println!("   - MismatchedDimensions: reference samples disagree on their number of features");
    println!("   - DimensionMismatch: the query vector does not match the reference dimension");
    println!("   - InvalidDistance: no neighbor could be chosen (NaN distances)");

    println!("\nAll examples completed successfully!");
}


use std::{fs, path::Path};

use example_scenario::ExampleScenario;
use serde::Deserialize;

#[test]
fn test_scenarios() {
    let scenarios = get_all_scenarios();
    assert!(!scenarios.is_empty(), "No scenarios found");

    for scenario in &scenarios {
        println!("Running scenario `{}`", scenario.name());
        scenario.run();
    }
}

fn get_all_scenarios() -> Vec<ExampleScenario> {
    let examples_dir = Path::new("tests/examples");
    let entries = fs::read_dir(examples_dir)
        .expect("Failed to read examples directory")
        .collect::<Vec<_>>();

    let mut scenarios = Vec::new();

    for entry in entries {
        let entry = entry.expect("Failed to read directory entry");
        let path = entry.path();

        if path.is_file() && path.extension().and_then(|ext| ext.to_str()) == Some("yml") {
            let file = fs::File::open(&path).expect("Failed to open example file");
            for document in serde_yaml::Deserializer::from_reader(file) {
                let scenario = ExampleScenario::deserialize(document)
                    .unwrap_or_else(|error| panic!("Failed to parse {}: {error}", path.display()));
                scenarios.push(scenario);
            }
        }
    }

    scenarios
}

use super::*;
use simulation::SimulationError;

#[test]
fn parse_config_fills_omitted_fields_with_defaults() {
    let config = parse_config(r#"{ "world_animals": 25, "generation_length": 100 }"#).expect("parse");
    assert_eq!(config.world_animals, 25);
    assert_eq!(config.generation_length, 100);
    assert_eq!(config.world_foods, Config::default().world_foods);
}

#[test]
fn parse_config_rejects_out_of_range_values() {
    let err = parse_config(r#"{ "speed_accel": -0.02 }"#).expect_err("negative accel");
    assert!(matches!(
        err,
        CliError::Simulation(SimulationError::InvalidConfig { field: "speed_accel", .. })
    ));
}

#[test]
fn parse_config_rejects_malformed_json() {
    let err = parse_config("{ world_animals: 25 ").expect_err("malformed");
    assert!(matches!(err, CliError::Json(_)));
}

#[test]
fn load_config_reports_missing_file() {
    let path = Path::new("does/not/exist/aviary.json");
    let err = load_config(path).expect_err("missing file");
    match err {
        CliError::ReadConfig { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected ReadConfig, got {other:?}"),
    }
}

#[test]
fn cli_parses_train_flags() {
    let cli = Cli::try_parse_from(["aviary", "train", "--generations", "3", "--seed", "7", "--json"])
        .expect("parse args");
    match cli.command {
        Command::Train(cmd) => {
            assert_eq!(cmd.generations, 3);
            assert_eq!(cmd.seed, Some(7));
            assert!(cmd.json);
        }
        Command::Config => panic!("expected train"),
    }
}

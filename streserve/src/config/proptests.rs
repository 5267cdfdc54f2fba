//! Property-based tests for configuration system.

use super::merger::ConfigMerger;
use super::schema::{Config, OutputFormat};
use crate::output::LinkStyle;
use crate::reservation::GroupCode;
use proptest::prelude::*;

fn link_style_strategy() -> impl Strategy<Value = LinkStyle> {
    prop_oneof![Just(LinkStyle::Link), Just(LinkStyle::Embed)]
}

fn output_format_strategy() -> impl Strategy<Value = OutputFormat> {
    prop_oneof![
        Just(OutputFormat::Json),
        Just(OutputFormat::Csv),
        Just(OutputFormat::Tsv),
        Just(OutputFormat::Table),
    ]
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(any::<bool>()),
        prop::option::of(1u64..=600),
        prop::option::of(link_style_strategy()),
        prop::option::of(output_format_strategy()),
        prop::option::of(GroupCode::MIN..=99_999_999i64),
    )
        .prop_map(
            |(disable_autoinit, lock_wait, link_style, output_format, min_group_code)| Config {
                disable_autoinit,
                maximum_lock_wait_seconds: lock_wait,
                link_style,
                output_format,
                min_group_code,
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Values present in the higher source win; absent ones fall through
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut result = low.clone();
        ConfigMerger::merge_into(&mut result, &high);

        prop_assert_eq!(result.disable_autoinit, high.disable_autoinit.or(low.disable_autoinit));
        prop_assert_eq!(
            result.maximum_lock_wait_seconds,
            high.maximum_lock_wait_seconds.or(low.maximum_lock_wait_seconds)
        );
        prop_assert_eq!(result.link_style, high.link_style.or(low.link_style));
        prop_assert_eq!(result.output_format, high.output_format.or(low.output_format));
    }

    // No merge order can lower the group code threshold
    #[test]
    fn config_merge_never_lowers_group_code_minimum(low in config_strategy(), high in config_strategy()) {
        let mut result = low.clone();
        ConfigMerger::merge_into(&mut result, &high);

        prop_assert!(result.group_code_minimum() >= low.group_code_minimum());
        prop_assert!(result.group_code_minimum() >= high.group_code_minimum());
        prop_assert!(result.group_code_minimum() >= GroupCode::MIN);
    }

    // Merging an empty config changes nothing
    #[test]
    fn config_merge_empty_is_identity(config in config_strategy()) {
        let mut result = config.clone();
        ConfigMerger::merge_into(&mut result, &Config::default());
        prop_assert_eq!(result, config);
    }

    // Configs survive a YAML round trip
    #[test]
    fn config_yaml_roundtrip(config in config_strategy()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(parsed, config);
    }
}

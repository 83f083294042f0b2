use std::{
    collections::BTreeMap,
    fs::File,
    io::{self, BufReader, Read},
    path::Path,
};

use anyhow::Context;
use tracing::{debug, info, warn};

use voyager_model::{
    ClusterLocation, Label, Location, LocationSet, ResourceName, SERVICE_LABEL_LABEL,
    SERVICE_NAME_LABEL, ServiceName, resource_name_schema,
};

use crate::cli::DescribeArgs;

/// Outcome of [`check_names`]: one line per name plus the failure count.
#[derive(Debug)]
pub struct NameReport {
    pub lines: Vec<String>,
    pub invalid: usize,
}

impl NameReport {
    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}

pub fn describe(args: &DescribeArgs) -> anyhow::Result<String> {
    let cluster = ClusterLocation::new(args.env_type, args.account.clone(), args.region.clone());
    debug!(cluster = %cluster, label = args.label.as_str(), "describing location");

    if args.cluster {
        return if args.json {
            serde_json::to_string_pretty(&cluster).context("serialize cluster location")
        } else {
            Ok(cluster.to_string())
        };
    }

    let location = cluster.location(args.label.clone());
    if args.json {
        serde_json::to_string_pretty(&location).context("serialize location")
    } else {
        Ok(location.to_string())
    }
}

/// Read locations from `file` (stdin for `None` or `-`).
pub fn parse_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) if path != Path::new("-") => {
            let f = File::open(path).with_context(|| format!("open {}", path.display()))?;
            render_locations(BufReader::new(f))
                .with_context(|| format!("read locations from {}", path.display()))
        }
        _ => render_locations(io::stdin().lock()).context("read locations from stdin"),
    }
}

/// One display line per location, then the distinct clusters they map to.
pub fn render_locations<R: Read>(reader: R) -> anyhow::Result<String> {
    let input: serde_json::Value =
        serde_json::from_reader(reader).context("input is not valid JSON")?;
    let locations: Vec<Location> = if input.is_array() {
        serde_json::from_value(input).context("invalid location array")?
    } else {
        vec![serde_json::from_value(input).context("invalid location")?]
    };
    if locations.is_empty() {
        warn!("no locations in input");
    }

    let unique: LocationSet = locations.iter().cloned().collect();
    let clusters = unique.cluster_locations();
    info!(
        locations = locations.len(),
        clusters = clusters.len(),
        "parsed locations"
    );

    let mut lines: Vec<String> = locations.iter().map(Location::to_string).collect();
    lines.push("clusters:".to_string());
    lines.extend(clusters.iter().map(|cl| format!("  {cl}")));
    Ok(lines.join("\n"))
}

pub fn labels(service: &ServiceName, label: &Label) -> anyhow::Result<String> {
    let mut out = BTreeMap::new();
    out.insert(SERVICE_NAME_LABEL, service.as_str());
    if !label.is_empty() {
        out.insert(SERVICE_LABEL_LABEL, label.as_str());
    }
    serde_json::to_string_pretty(&out).context("serialize labels")
}

/// Validate every name; the caller decides how to surface failures.
pub fn check_names(names: &[String]) -> NameReport {
    let mut report = NameReport {
        lines: Vec::with_capacity(names.len()),
        invalid: 0,
    };

    for name in names {
        match ResourceName::parse(name.as_str()) {
            Ok(_) => report.lines.push(format!("ok {name}")),
            Err(e) => {
                debug!(name = name.as_str(), error = %e, "rejected resource name");
                report.invalid += 1;
                report.lines.push(format!("invalid {name}: {e}"));
            }
        }
    }
    report
}

pub fn schema() -> anyhow::Result<String> {
    serde_json::to_string_pretty(&resource_name_schema()).context("serialize schema")
}

#[cfg(test)]
mod tests {
    use voyager_model::EnvType;

    use super::*;

    fn args(label: &str) -> DescribeArgs {
        DescribeArgs {
            env_type: EnvType::Prod,
            account: "acct1".into(),
            region: "us-east-1".into(),
            label: label.into(),
            cluster: false,
            json: false,
        }
    }

    #[test]
    fn describe_location_display() {
        assert_eq!(
            describe(&args("blue")).unwrap(),
            "blue--us-east-1.prod (account: acct1)"
        );
        assert_eq!(describe(&args("")).unwrap(), "us-east-1.prod (account: acct1)");
    }

    #[test]
    fn describe_cluster_ignores_label() {
        let a = DescribeArgs {
            cluster: true,
            ..args("blue")
        };
        assert_eq!(describe(&a).unwrap(), "us-east-1.prod (account: acct1)");
    }

    #[test]
    fn describe_json() {
        let a = DescribeArgs {
            json: true,
            ..args("blue")
        };
        let out: serde_json::Value = serde_json::from_str(&describe(&a).unwrap()).unwrap();
        assert_eq!(
            out,
            serde_json::json!({"envType": "prod", "account": "acct1", "region": "us-east-1", "label": "blue"})
        );
    }

    #[test]
    fn render_single_object() {
        let input = r#"{"envType":"dev","account":"a1","region":"eu-west-1","label":"green"}"#;
        let out = render_locations(input.as_bytes()).unwrap();
        assert_eq!(
            out,
            "green--eu-west-1.dev (account: a1)\nclusters:\n  eu-west-1.dev (account: a1)"
        );
    }

    #[test]
    fn render_array_collapses_clusters() {
        let input = r#"[
            {"envType":"prod","account":"a1","region":"us-east-1","label":"blue"},
            {"envType":"prod","account":"a1","region":"us-east-1","label":"green"},
            {"envType":"dev","account":"a1","region":"us-east-1"}
        ]"#;
        let out = render_locations(input.as_bytes()).unwrap();
        let lines: Vec<_> = out.lines().collect();

        assert_eq!(
            lines,
            [
                "blue--us-east-1.prod (account: a1)",
                "green--us-east-1.prod (account: a1)",
                "us-east-1.dev (account: a1)",
                "clusters:",
                "  us-east-1.dev (account: a1)",
                "  us-east-1.prod (account: a1)",
            ]
        );
    }

    #[test]
    fn render_rejects_bad_input() {
        let err = render_locations(&b"not json"[..]).unwrap_err();
        assert!(format!("{err:#}").contains("not valid JSON"));

        let unknown_env = r#"{"envType":"qa","account":"a","region":"r"}"#;
        let err = render_locations(unknown_env.as_bytes()).unwrap_err();
        let chain = format!("{err:#}");
        assert!(chain.contains("unknown variant `qa`"), "{chain}");
    }

    #[test]
    fn render_names_missing_field() {
        let missing = r#"[{"envType":"dev","account":"a"}]"#;
        let err = render_locations(missing.as_bytes()).unwrap_err();
        let chain = format!("{err:#}");
        assert!(chain.contains("invalid location array"), "{chain}");
        assert!(chain.contains("missing field `region`"), "{chain}");
    }

    #[test]
    fn labels_include_label_only_when_set() {
        let with: serde_json::Value =
            serde_json::from_str(&labels(&"billing".into(), &"blue".into()).unwrap()).unwrap();
        assert_eq!(
            with,
            serde_json::json!({
                "voyager.atl-paas.net/serviceName": "billing",
                "voyager.atl-paas.net/label": "blue",
            })
        );

        let without: serde_json::Value =
            serde_json::from_str(&labels(&"billing".into(), &Label::default()).unwrap()).unwrap();
        assert_eq!(
            without,
            serde_json::json!({"voyager.atl-paas.net/serviceName": "billing"})
        );
    }

    #[test]
    fn check_names_all_valid() {
        let report = check_names(&["svc-a".to_string(), "svc.b".to_string()]);
        assert_eq!(report.invalid, 0);
        assert_eq!(report.render(), "ok svc-a\nok svc.b");
    }

    #[test]
    fn check_names_keeps_ok_lines_next_to_failures() {
        let report = check_names(&["svc-a".to_string(), "Bad--Name".to_string()]);

        assert_eq!(report.invalid, 1);
        assert_eq!(report.lines.len(), 2);
        assert_eq!(report.lines[0], "ok svc-a");
        assert!(report.lines[1].starts_with("invalid Bad--Name: "));
    }

    #[test]
    fn schema_is_json() {
        let out: serde_json::Value = serde_json::from_str(&schema().unwrap()).unwrap();
        assert_eq!(out["maxLength"], 253);
    }
}

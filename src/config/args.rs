use log::warn;

use crate::constants::VALUE_FLAGS;

/// Argument list rewritten into one token per flag and one per value
#[derive(Debug, Default, PartialEq, Eq)]
pub struct NormalizedArgs {
    pub argv: Vec<String>,
    /// `-h` was given as a flag somewhere in the list.
    pub help: bool,
}

/// Rewrite raw arguments the way short-option parsing reads them.
///
/// Clusters like `-hf path` are split, attached values (`-c10`) are detached
/// and unknown flags are dropped with a warning. A value always belongs to
/// its flag, even when it starts with `-`. Everything after `--` is kept as is.
pub fn normalize_args(args: Vec<String>) -> NormalizedArgs {
    let mut iter = args.into_iter();
    let mut normalized = NormalizedArgs {
        argv: iter.next().into_iter().collect(),
        help: false,
    };

    while let Some(arg) = iter.next() {
        if arg == "--" {
            normalized.argv.push(arg);
            normalized.argv.extend(iter.by_ref());
            break;
        }
        if arg.starts_with("--") {
            warn!("Ignoring unknown option {}", arg);
            continue;
        }
        let cluster = match arg.strip_prefix('-') {
            Some(cluster) if !cluster.is_empty() => cluster,
            _ => {
                normalized.argv.push(arg);
                continue;
            }
        };

        for (idx, flag) in cluster.char_indices() {
            if flag == 'h' {
                normalized.help = true;
                normalized.argv.push("-h".to_string());
            } else if VALUE_FLAGS.contains(&flag) {
                normalized.argv.push(format!("-{}", flag));
                let attached = &cluster[idx + flag.len_utf8()..];
                if !attached.is_empty() {
                    normalized.argv.push(attached.to_string());
                } else if let Some(value) = iter.next() {
                    normalized.argv.push(value);
                }
                break;
            } else {
                warn!("Ignoring unknown option -{}", flag);
            }
        }
    }

    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(args: &[&str]) -> NormalizedArgs {
        normalize_args(args.iter().map(|s| s.to_string()).collect())
    }

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_plain_pairs_are_untouched() {
        let n = normalize(&["bb", "-f", "a.log", "-u", "http://h"]);
        assert_eq!(n.argv, argv(&["bb", "-f", "a.log", "-u", "http://h"]));
        assert!(!n.help);
    }

    #[test]
    fn test_attached_values_are_detached() {
        let n = normalize(&["bb", "-c10", "-fa.log"]);
        assert_eq!(n.argv, argv(&["bb", "-c", "10", "-f", "a.log"]));
    }

    #[test]
    fn test_clusters_are_split() {
        let n = normalize(&["bb", "-hf", "a.log"]);
        assert_eq!(n.argv, argv(&["bb", "-h", "-f", "a.log"]));
        assert!(n.help);
    }

    #[test]
    fn test_hyphen_values_belong_to_flag() {
        let n = normalize(&["bb", "-c", "-5", "-u", "-h"]);
        assert_eq!(n.argv, argv(&["bb", "-c", "-5", "-u", "-h"]));
        assert!(!n.help);
    }

    #[test]
    fn test_unknown_flags_are_dropped() {
        let n = normalize(&["bb", "-x", "-qf", "a.log", "--verbose", "-u", "h"]);
        assert_eq!(n.argv, argv(&["bb", "-f", "a.log", "-u", "h"]));
    }

    #[test]
    fn test_missing_trailing_value_keeps_flag() {
        let n = normalize(&["bb", "-u"]);
        assert_eq!(n.argv, argv(&["bb", "-u"]));
    }

    #[test]
    fn test_operands_and_escape() {
        let n = normalize(&["bb", "stray", "-", "--", "-h"]);
        assert_eq!(n.argv, argv(&["bb", "stray", "-", "--", "-h"]));
        assert!(!n.help);
    }

    #[test]
    fn test_empty_value_is_kept() {
        let n = normalize(&["bb", "-f", ""]);
        assert_eq!(n.argv, argv(&["bb", "-f", ""]));
    }
}

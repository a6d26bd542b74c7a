//! Command line surface
//!
//! The driver's flag table is rendered as clap arguments, each with its
//! environment variable. [`ClapOptions`] then serves the parsed matches to
//! the driver through `DriverOptions`.

use clap::parser::ValueSource;
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use machine_driver::{DriverOptions, Flag, FlagError, FlagKind};
use std::path::PathBuf;

pub const ARG_VERSION: &str = "print-version";
pub const ARG_OPTIONS_FILE: &str = "options-file";
pub const OPTIONS_FILE_ENV: &str = "HETZNER_DRIVER_OPTIONS";

pub fn command(flags: &[Flag]) -> Command {
    let command = Command::new("docker-machine-driver-hetzner")
        .about("Hetzner Cloud machine driver: validate driver flags and print the configuration")
        .arg(
            Arg::new(ARG_VERSION)
                .short('v')
                .long("version")
                .action(ArgAction::SetTrue)
                .help("Print the driver version"),
        )
        .arg(
            Arg::new(ARG_OPTIONS_FILE)
                .long(ARG_OPTIONS_FILE)
                .env(OPTIONS_FILE_ENV)
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("YAML file of flag values (command line and environment take precedence)"),
        );

    flags
        .iter()
        .fold(command, |command, flag| command.arg(flag_arg(flag)))
}

fn flag_arg(flag: &Flag) -> Arg {
    let arg = Arg::new(flag.name)
        .long(flag.name)
        .env(flag.env_var)
        .help(flag.usage);

    // no clap defaults: unset flags must fall through to the options file
    match flag.kind {
        FlagKind::String { .. } => arg.value_name("VALUE"),
        FlagKind::Bool => arg.action(ArgAction::SetTrue),
        FlagKind::Int { .. } => arg
            .value_name("N")
            .value_parser(value_parser!(i64))
            .allow_negative_numbers(true),
        FlagKind::StringList => arg.value_name("VALUE").action(ArgAction::Append),
    }
}

/// `DriverOptions` over parsed command line matches
///
/// Only values given on the command line or through the environment count;
/// anything else reads as unset.
pub struct ClapOptions {
    matches: ArgMatches,
    known: Vec<&'static str>,
}

impl ClapOptions {
    pub fn new(matches: ArgMatches, flags: &[Flag]) -> Self {
        Self {
            matches,
            known: flags.iter().map(|f| f.name).collect(),
        }
    }

    fn is_set(&self, name: &str) -> bool {
        self.known.iter().any(|known| *known == name)
            && matches!(
                self.matches.value_source(name),
                Some(ValueSource::CommandLine | ValueSource::EnvVariable)
            )
    }

    fn one<T>(&self, name: &str, expected: &'static str) -> machine_driver::Result<Option<T>>
    where
        T: Clone + Send + Sync + 'static,
    {
        if !self.is_set(name) {
            return Ok(None);
        }
        self.matches
            .try_get_one::<T>(name)
            .map(|value| value.cloned())
            .map_err(|_| mismatch(name, expected))
    }
}

fn mismatch(name: &str, expected: &'static str) -> FlagError {
    FlagError::TypeMismatch {
        flag: name.to_string(),
        expected,
        actual: "command line value",
    }
}

impl DriverOptions for ClapOptions {
    fn string(&self, name: &str) -> machine_driver::Result<Option<String>> {
        self.one::<String>(name, "string")
    }

    fn bool(&self, name: &str) -> machine_driver::Result<Option<bool>> {
        self.one::<bool>(name, "bool")
    }

    fn int(&self, name: &str) -> machine_driver::Result<Option<i64>> {
        self.one::<i64>(name, "int")
    }

    fn string_list(&self, name: &str) -> machine_driver::Result<Option<Vec<String>>> {
        if !self.is_set(name) {
            return Ok(None);
        }
        let values: Vec<String> = self
            .matches
            .try_get_many::<String>(name)
            .map_err(|_| mismatch(name, "string list"))?
            .map(|values| values.cloned().collect())
            .unwrap_or_default();

        // an environment variable carries the whole list, comma separated
        if self.matches.value_source(name) == Some(ValueSource::EnvVariable) {
            return Ok(Some(
                values
                    .iter()
                    .flat_map(|value| value.split(','))
                    .map(|value| value.trim().to_string())
                    .collect(),
            ));
        }
        Ok(Some(values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use machine_driver_hetzner::create_flags;

    fn parse(args: &[&str]) -> ClapOptions {
        let flags = create_flags();
        let argv = std::iter::once("docker-machine-driver-hetzner").chain(args.iter().copied());
        let matches = command(&flags).try_get_matches_from(argv).unwrap();
        ClapOptions::new(matches, &flags)
    }

    #[test]
    fn test_command_is_well_formed() {
        command(&create_flags()).debug_assert();
    }

    #[test]
    fn test_typed_lookups() {
        let opts = parse(&[
            "--image",
            "debian-12",
            "--disable-public",
            "--ssh-port",
            "2222",
            "--server-label",
            "env=prod",
            "--server-label",
            "a=b=c",
        ]);

        assert_eq!(opts.string("image").unwrap(), Some("debian-12".to_string()));
        assert_eq!(opts.bool("disable-public").unwrap(), Some(true));
        assert_eq!(opts.int("ssh-port").unwrap(), Some(2222));
        assert_eq!(
            opts.string_list("server-label").unwrap(),
            Some(vec!["env=prod".to_string(), "a=b=c".to_string()])
        );
    }

    #[test]
    fn test_unset_flags_read_as_none() {
        temp_env::with_vars_unset(
            ["HETZNER_IMAGE", "HETZNER_USE_PRIVATE_NETWORK", "HETZNER_NETWORKS"],
            || {
                let opts = parse(&[]);
                assert_eq!(opts.string("image").unwrap(), None);
                assert_eq!(opts.bool("use-private-network").unwrap(), None);
                assert_eq!(opts.string_list("networks").unwrap(), None);
                assert_eq!(opts.string("no-such-flag").unwrap(), None);
            },
        );
    }

    #[test]
    fn test_env_var_lookup() {
        temp_env::with_vars(
            [
                ("HETZNER_IMAGE_ID", Some("79871865169581")),
                ("HETZNER_DISABLE_PUBLIC", Some("true")),
            ],
            || {
                let opts = parse(&[]);
                assert_eq!(
                    opts.string("image-id").unwrap(),
                    Some("79871865169581".to_string())
                );
                assert_eq!(opts.bool("disable-public").unwrap(), Some(true));
            },
        );
    }

    #[test]
    fn test_list_env_var_is_comma_separated() {
        temp_env::with_vars(
            [
                ("HETZNER_NETWORKS", Some("net-1,net-2")),
                ("HETZNER_SERVER_LABELS", Some("env=prod, team=infra")),
            ],
            || {
                let opts = parse(&[]);
                assert_eq!(
                    opts.string_list("networks").unwrap(),
                    Some(vec!["net-1".to_string(), "net-2".to_string()])
                );
                assert_eq!(
                    opts.string_list("server-label").unwrap(),
                    Some(vec!["env=prod".to_string(), "team=infra".to_string()])
                );
            },
        );
    }

    #[test]
    fn test_list_command_line_values_are_not_split() {
        temp_env::with_var_unset("HETZNER_SERVER_LABELS", || {
            let opts = parse(&["--server-label", "note=a,b"]);
            assert_eq!(
                opts.string_list("server-label").unwrap(),
                Some(vec!["note=a,b".to_string()])
            );
        });
    }

    #[test]
    fn test_wrong_type_is_reported() {
        let opts = parse(&["--ssh-port", "22"]);
        assert!(opts.string("ssh-port").is_err());
    }

    #[test]
    fn test_invalid_int_rejected_by_parser() {
        let flags = create_flags();
        let result = command(&flags).try_get_matches_from(["driver", "--ssh-port", "ssh"]);
        assert!(result.is_err());
    }
}

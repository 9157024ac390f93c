use std::path::PathBuf;

#[derive(Debug, Eq, PartialEq)]
pub enum Command {
    Encrypt(PathBuf),
    Decrypt(PathBuf),
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Default, Eq, PartialEq)]
pub struct Args {
    pub command: Option<Command>,
    pub short_help: bool,
    pub long_help: bool,
    pub version: bool,
}

impl Args {
    pub fn build_from_args<I>(mut cli_args: I) -> Result<Self, String>
    where
        I: Iterator<Item: AsRef<str> + ToString>,
    {
        let mut args = Self::default();

        while let Some(arg) = cli_args.next() {
            let some_command = args.command.is_some();

            match arg.as_ref() {
                "encrypt" if !some_command => {
                    let path = cli_args
                        .next()
                        .ok_or_else(|| "'encrypt' requires a file path".to_string())?;
                    args.command = Some(Command::Encrypt(PathBuf::from(path.as_ref())));
                }
                "decrypt" if !some_command => {
                    let path = cli_args
                        .next()
                        .ok_or_else(|| "'decrypt' requires a file path".to_string())?;
                    args.command = Some(Command::Decrypt(PathBuf::from(path.as_ref())));
                }
                "-h" => args.short_help = true,
                "--help" => args.long_help = true,
                "-V" | "--version" => args.version = true,
                unknown => {
                    return Err(format!("Unknown argument: '{unknown}'"));
                }
            }
        }

        Ok(args)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::iter_on_single_items)]

    use super::*;

    #[test]
    fn command_encrypt_regular() {
        let args = Args::build_from_args(["encrypt", "notes.txt"].iter()).unwrap();
        assert_eq!(
            args.command,
            Some(Command::Encrypt(PathBuf::from("notes.txt")))
        );
    }

    #[test]
    fn command_encrypt_without_path_is_error() {
        let err = Args::build_from_args(["encrypt"].iter()).unwrap_err();
        assert!(err.contains("requires a file path"));
    }

    #[test]
    fn command_decrypt_regular() {
        let args = Args::build_from_args(["decrypt", "notes.txt.enc"].iter()).unwrap();
        assert_eq!(
            args.command,
            Some(Command::Decrypt(PathBuf::from("notes.txt.enc")))
        );
    }

    #[test]
    fn second_command_does_not_override_first() {
        let err =
            Args::build_from_args(["encrypt", "a.txt", "decrypt", "b.txt.enc"].iter()).unwrap_err();
        assert!(err.contains("'decrypt'"));
    }

    #[test]
    fn command_unknown_is_error() {
        let err = Args::build_from_args(["unknown"].iter()).unwrap_err();
        assert!(err.contains("'unknown'"));
    }

    #[test]
    fn option_short_help_regular() {
        let args = Args::build_from_args(["-h"].iter()).unwrap();
        assert!(args.short_help);
        assert!(!args.long_help);
    }

    #[test]
    fn option_long_help_regular() {
        let args = Args::build_from_args(["--help"].iter()).unwrap();
        assert!(!args.short_help);
        assert!(args.long_help);
    }

    #[test]
    fn option_version_short_and_long() {
        assert!(Args::build_from_args(["-V"].iter()).unwrap().version);
        assert!(Args::build_from_args(["--version"].iter()).unwrap().version);
    }
}

use crate::{RESET_COLOR, Signal, print_to};
use std::env;
use std::ffi::OsStr;
use std::io::{self, Write};

/// Commands implemented by the shell itself.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Builtin {
    Help,
    Cd,
    Exit,
}

impl Builtin {
    /// Registration order, which is also the order `help` lists them in.
    pub const ALL: [Builtin; 3] = [Builtin::Help, Builtin::Cd, Builtin::Exit];

    pub fn name(self) -> &'static str {
        match self {
            Builtin::Help => "help",
            Builtin::Cd => "cd",
            Builtin::Exit => "exit",
        }
    }

    /// Case-sensitive exact match of the raw bytes against the registered names.
    pub fn lookup(name: &OsStr) -> Option<Builtin> {
        Self::ALL
            .into_iter()
            .find(|builtin| OsStr::new(builtin.name()) == name)
    }

    pub fn names() -> impl Iterator<Item = &'static str> {
        Self::ALL.into_iter().map(Builtin::name)
    }

    /// Runs the builtin with the whole token sequence, `args[0]` being its own name.
    ///
    /// The returned signal depends only on the builtin: failing to write a
    /// diagnostic never turns `exit` into a continue or anything else into a stop.
    pub fn run(self, args: &[&OsStr], stdout: &mut dyn Write, stderr: &mut dyn Write) -> Signal {
        let result = match self {
            Builtin::Help => help(stdout),
            Builtin::Cd => cd(args, stderr),
            Builtin::Exit => exit(stdout),
        };

        if let Err(err) = result {
            log::warn!("{}: {err}", self.name());
        }

        self.signal()
    }

    fn signal(self) -> Signal {
        match self {
            Builtin::Help | Builtin::Cd => Signal::Continue,
            Builtin::Exit => Signal::Terminate,
        }
    }
}

fn help(stdout: &mut dyn Write) -> io::Result<()> {
    print_to!(stdout, "_____________________\n\n");
    print_to!(stdout, "CShell by Awf Wiswasi\n");
    print_to!(stdout, "https://github.com/awiswasi/\n");
    print_to!(stdout, "\nThis is a simple Linux shell written in Rust.\n");
    print_to!(stdout, "Built-in commands:\n");

    for name in Builtin::names() {
        print_to!(stdout, "  {}\n", name);
    }

    print_to!(
        stdout,
        "\nFor any questions or support, please contact me: awf.wis@gmail.com\n"
    );
    print_to!(
        stdout,
        "__________________________________________________________________\n\n"
    );
    stdout.flush()
}

fn cd(args: &[&OsStr], stderr: &mut dyn Write) -> io::Result<()> {
    let Some(path) = args.get(1) else {
        print_to!(stderr, "cshell: expected argument to \"cd\"\n");
        return Ok(());
    };

    if let Err(err) = env::set_current_dir(*path) {
        print_to!(stderr, "cshell: {}\n", err);
    }

    Ok(())
}

fn exit(stdout: &mut dyn Write) -> io::Result<()> {
    print_to!(stdout, "{}", RESET_COLOR);
    stdout.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serial_test::serial;

    fn run(builtin: Builtin, args: &[&str]) -> (Signal, String, String) {
        let args: Vec<&OsStr> = args.iter().map(OsStr::new).collect();
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let signal = builtin.run(&args, &mut stdout, &mut stderr);

        (
            signal,
            String::from_utf8(stdout).unwrap(),
            String::from_utf8(stderr).unwrap(),
        )
    }

    #[rstest]
    #[case("help", Some(Builtin::Help))]
    #[case("cd", Some(Builtin::Cd))]
    #[case("exit", Some(Builtin::Exit))]
    #[case("EXIT", None)]
    #[case("Help", None)]
    #[case("exit ", None)]
    #[case("", None)]
    #[case("ls", None)]
    fn lookup_test(#[case] name: &str, #[case] expected: Option<Builtin>) {
        assert_eq!(Builtin::lookup(OsStr::new(name)), expected);
    }

    #[test]
    fn lookup_compares_raw_bytes() {
        use std::os::unix::ffi::OsStrExt;

        assert_eq!(Builtin::lookup(OsStr::from_bytes(b"exit\xff")), None);
        assert_eq!(Builtin::lookup(OsStr::from_bytes(b"cd")), Some(Builtin::Cd));
    }

    #[test]
    fn names_in_registration_order() {
        assert_eq!(Builtin::names().collect::<Vec<_>>(), vec!["help", "cd", "exit"]);
    }

    #[test]
    fn help_lists_banner_and_builtins() {
        let (signal, stdout, stderr) = run(Builtin::Help, &["help"]);
        assert_eq!(signal, Signal::Continue);
        assert!(stdout.contains("CShell by Awf Wiswasi\n"));
        assert!(stdout.contains("Built-in commands:\n  help\n  cd\n  exit\n"));
        assert!(stdout.contains("\nThis is a simple Linux shell written in Rust.\n"));
        assert_eq!(stderr, "");
    }

    #[rstest]
    #[case(&["exit"])]
    #[case(&["exit", "0"])]
    #[case(&["exit", "1", "extra"])]
    fn exit_always_terminates(#[case] args: &[&str]) {
        let (signal, stdout, _) = run(Builtin::Exit, args);
        assert_eq!(signal, Signal::Terminate);
        assert_eq!(stdout, RESET_COLOR);
    }

    #[test]
    fn exit_terminates_even_if_stdout_is_broken() {
        struct Broken;

        impl Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::from(io::ErrorKind::BrokenPipe))
            }

            fn flush(&mut self) -> io::Result<()> {
                Err(io::Error::from(io::ErrorKind::BrokenPipe))
            }
        }

        let signal = Builtin::Exit.run(&[OsStr::new("exit")], &mut Broken, &mut Vec::<u8>::new());
        assert_eq!(signal, Signal::Terminate);
    }

    #[test]
    #[serial]
    fn cd_without_argument_keeps_directory() {
        let before = env::current_dir().unwrap();
        let (signal, _, stderr) = run(Builtin::Cd, &["cd"]);
        assert_eq!(signal, Signal::Continue);
        assert_eq!(stderr, "cshell: expected argument to \"cd\"\n");
        assert_eq!(env::current_dir().unwrap(), before);
    }

    #[test]
    #[serial]
    fn cd_to_missing_directory_reports_os_error() {
        let before = env::current_dir().unwrap();
        let (signal, _, stderr) = run(Builtin::Cd, &["cd", "/nonexistent_path_xyz"]);
        assert_eq!(signal, Signal::Continue);
        assert!(stderr.starts_with("cshell: "), "{stderr}");
        assert!(stderr.contains("No such file or directory"), "{stderr}");
        assert_eq!(env::current_dir().unwrap(), before);
    }

    #[test]
    #[serial]
    fn cd_changes_directory() {
        let before = env::current_dir().unwrap();
        let target = env::temp_dir().canonicalize().unwrap();

        let (signal, _, stderr) = run(Builtin::Cd, &["cd", target.to_str().unwrap()]);
        let after = env::current_dir().unwrap();
        env::set_current_dir(&before).unwrap();

        assert_eq!(signal, Signal::Continue);
        assert_eq!(stderr, "");
        assert_eq!(after, target);
    }
}

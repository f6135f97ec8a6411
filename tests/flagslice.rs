/// Repeatable string flag tests, driven through a real flag set the way a
/// program would use them.
mod flagslice {
    use flagslice::{
        command_line, error::Error, slice, test::parse_repeated, ErrorHandling, FlagSet, Strings,
    };

    const ARGV: &[&str] = &["-f", "foo", "-f=bar"];

    #[test]
    fn absent_default_with_arguments() {
        assert_eq!(parse_repeated(None, ARGV).values(), vec!["foo", "bar"]);
    }

    #[test]
    fn empty_default_with_arguments() {
        assert_eq!(
            parse_repeated(Some(&[] as &[&str]), ARGV).values(),
            vec!["foo", "bar"]
        );
    }

    #[test]
    fn default_is_discarded_not_merged() {
        assert_eq!(
            parse_repeated(Some(&["tridge", "baaz"][..]), ARGV).values(),
            vec!["foo", "bar"]
        );
    }

    #[test]
    fn no_arguments_keeps_the_default() {
        assert!(parse_repeated(None, &[]).is_empty());
        assert_eq!(
            parse_repeated(Some(&["tridge", "baaz"][..]), &[]).values(),
            vec!["tridge", "baaz"]
        );
    }

    #[test]
    fn duplicates_keep_their_order() {
        assert_eq!(
            parse_repeated(None, &["-f", "bar", "--f", "bar", "-f", "baz"]).values(),
            vec!["bar", "bar", "baz"]
        );
    }

    #[test]
    fn default_slice_is_only_a_seed() {
        let default = vec!["tridge", "baaz"];
        let values = parse_repeated(Some(&default[..]), ARGV);
        assert_eq!(values.values(), vec!["foo", "bar"]);
        assert_eq!(default, vec!["tridge", "baaz"]);
    }

    #[test]
    fn caller_owned_target() {
        let mut flags = FlagSet::new("test", ErrorHandling::Continue);
        let target = Strings::from(vec!["already".to_string()]);
        slice::string_var_fs(&mut flags, &target, "s", Some(&["foo"][..]), "").unwrap();
        assert_eq!(target.values(), vec!["already", "foo"]);

        flags.parse(["-s", "bar", "operand"]).unwrap();
        assert_eq!(target.values(), vec!["bar"]);
        assert_eq!(flags.args(), ["operand"]);
    }

    #[test]
    fn failed_declaration_leaves_target_alone() {
        let mut flags = FlagSet::new("test", ErrorHandling::Continue);
        slice::string_fs(&mut flags, "s", None, "").unwrap();

        let target = Strings::new();
        assert_eq!(
            slice::string_var_fs(&mut flags, &target, "s", Some(&["foo"][..]), ""),
            Err(Error::DuplicateFlag("s".into()))
        );
        assert!(target.is_empty());
    }

    #[test]
    fn several_repeatable_flags_interleaved() {
        let mut flags = FlagSet::new("test", ErrorHandling::Continue);
        let a = slice::string_fs(&mut flags, "a", Some(&["x"][..]), "").unwrap();
        let b = slice::string_fs(&mut flags, "b", Some(&["y"][..]), "").unwrap();
        let c = slice::string_fs(&mut flags, "c", Some(&["z"][..]), "").unwrap();

        flags.parse(["-a", "1", "-b", "2", "-a", "3"]).unwrap();
        assert_eq!(a.values(), vec!["1", "3"]);
        assert_eq!(b.values(), vec!["2"]);
        assert_eq!(c.values(), vec!["z"]);
    }

    #[test]
    fn textual_representation() {
        let mut flags = FlagSet::new("test", ErrorHandling::Continue);
        slice::string_fs(&mut flags, "f", None, "").unwrap();
        assert_eq!(flags.lookup("f").unwrap().default_value(), "");

        flags.parse(["-f", "a", "-f", "b"]).unwrap();
        let text = flags.lookup("f").unwrap().value().to_string();
        let a = text.find("a").unwrap();
        let b = text.find("b").unwrap();
        assert!(a < b, "{}", text);
    }

    // The process-wide set is shared by every test in this binary, so only
    // this test touches it and it never calls parse().
    #[test]
    fn process_wide_flag_set() {
        let values = command_line::string("cl-string", Some(&["d"][..]), "").unwrap();
        let target = Strings::new();
        command_line::string_var(&target, "cl-string-var", None, "").unwrap();

        assert_eq!(values.values(), vec!["d"]);
        assert_eq!(
            command_line::string("cl-string", None, ""),
            Err(Error::DuplicateFlag("cl-string".into()))
        );

        command_line::with(|flags| {
            flags.set("cl-string", "one")?;
            flags.set("cl-string", "two")?;
            flags.set("cl-string-var", "three")
        })
        .unwrap();

        assert_eq!(values.values(), vec!["one", "two"]);
        assert_eq!(target.values(), vec!["three"]);
        assert!(!command_line::parsed());

        let seeded = Strings::from(vec!["kept".to_string()]);
        command_line::string_var(&seeded, "cl-seeded", Some(&["tridge", "baaz"][..]), "")
            .unwrap();
        assert_eq!(seeded.values(), vec!["kept", "tridge", "baaz"]);
        command_line::with(|flags| flags.set("cl-seeded", "foo")).unwrap();
        assert_eq!(seeded.values(), vec!["foo"]);
        assert!(command_line::args().is_empty());
    }
}

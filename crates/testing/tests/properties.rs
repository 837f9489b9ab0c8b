//! Property tests for the quantified invariants. Inputs are drawn from a small
//! alphabet plus the separator/drive/percent-escape vocabulary so generated
//! cases actually exercise root parsing instead of drowning in plain letters.

use proptest::prelude::*;

fn path_fragment() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("a".to_string()),
            Just("bb".to_string()),
            Just("..".to_string()),
            Just(".".to_string()),
            Just("/".to_string()),
            Just("\\".to_string()),
            Just("X:".to_string()),
            Just("%20".to_string()),
            Just("%zz".to_string()),
        ],
        0..8,
    )
    .prop_map(|v| v.concat())
}

proptest! {
    #[test]
    fn dirent_posix_canonicalize_is_idempotent(s in path_fragment()) {
        use pathkind::dirent::posix;
        let once = posix::canonicalize(&s);
        let twice = posix::canonicalize(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn dirent_dos_canonicalize_is_idempotent(s in path_fragment()) {
        use pathkind::dirent::dos;
        let once = dos::canonicalize(&s);
        let twice = dos::canonicalize(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn relpath_canonicalize_is_idempotent(s in path_fragment()) {
        use pathkind::relpath;
        let once = relpath::canonicalize(&s);
        let twice = relpath::canonicalize(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn dirent_posix_is_canonical_agrees_with_canonicalize(s in path_fragment()) {
        use pathkind::dirent::posix;
        prop_assert_eq!(posix::is_canonical(&s), posix::canonicalize(&s) == s);
    }

    #[test]
    fn dirent_posix_join_skip_inverse(a in path_fragment(), b in path_fragment()) {
        use pathkind::dirent::posix;
        let a = posix::canonicalize(&a);
        let b = posix::canonicalize(&posix::join(&a, &b));
        if posix::is_ancestor(&a, &b) {
            prop_assert_eq!(posix::join(&a, &posix::skip_ancestor(&a, &b)), b);
        }
    }

    #[test]
    fn dirent_posix_lca_commutative(a in path_fragment(), b in path_fragment()) {
        use pathkind::dirent::posix;
        let a = posix::canonicalize(&a);
        let b = posix::canonicalize(&b);
        prop_assert_eq!(posix::get_longest_ancestor(&a, &b), posix::get_longest_ancestor(&b, &a));
    }

    #[test]
    fn dirent_posix_lca_is_ancestor_of_both(a in path_fragment(), b in path_fragment()) {
        use pathkind::dirent::posix;
        let a = posix::canonicalize(&a);
        let b = posix::canonicalize(&b);
        let lca = posix::get_longest_ancestor(&a, &b);
        if !lca.is_empty() || (!posix::is_root(&a) && !posix::is_root(&b)) {
            prop_assert!(posix::is_ancestor(&lca, &a));
            prop_assert!(posix::is_ancestor(&lca, &b));
        }
    }

    #[test]
    fn dirent_posix_split_round_trips(s in path_fragment()) {
        use pathkind::dirent::posix;
        let p = posix::canonicalize(&s);
        if !p.is_empty() && !posix::is_root(&p) {
            let (dir, base) = posix::split(&p);
            prop_assert_eq!(posix::join(&dir, &base), p);
        }
    }

    #[test]
    fn dirent_posix_sandbox_safety(base in path_fragment(), p in path_fragment()) {
        use pathkind::dirent::posix;
        let base = posix::canonicalize(&base);
        if let (true, Some(r)) = posix::is_under_root(&base, &p) {
            prop_assert!(posix::is_ancestor(&base, &r));
        }
    }

    #[test]
    fn uri_canonicalize_is_idempotent(s in "(http|file|mailto)://[a-zA-Z0-9/.:_-]{0,20}") {
        use pathkind::uri;
        let once = uri::canonicalize(&s);
        let twice = uri::canonicalize(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn file_url_dirent_round_trip_posix(p in "/[a-zA-Z0-9/_-]{0,20}") {
        use pathkind::{dirent::posix, uri};
        let d = posix::canonicalize(&p);
        let url = uri::file_url_from_dirent_posix(&d);
        prop_assert_eq!(uri::dirent_from_file_url_posix(&url).unwrap(), d);
    }

    #[test]
    fn file_url_dirent_round_trip_dos(p in "[A-Za-z]:/[a-zA-Z0-9/_-]{0,20}") {
        use pathkind::{dirent::dos, uri};
        let d = dos::canonicalize(&p);
        let url = uri::file_url_from_dirent_dos(&d);
        prop_assert_eq!(uri::dirent_from_file_url_dos(&url).unwrap(), d);
    }
}

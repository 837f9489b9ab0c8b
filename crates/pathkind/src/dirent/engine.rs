//! The dirent algebra shared by the POSIX and DOS flavors. Both flavors differ only
//! in root classification, root normalization, and whether `\` is treated as a
//! separator. Everything past the root (component splitting, join, basename/dirname,
//! ancestry, style conversion, and the sandboxing walk in `is_under_root`) is the
//! same algorithm, so it lives here once and each flavor module instantiates it with
//! its own small set of primitives.

use alloc::borrow::Cow;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::{ancestry, canonical};

/// The handful of primitives that differ between POSIX and DOS dirents.
pub(crate) struct Engine {
    pub(crate) dos: bool,
    pub(crate) root_len: fn(&str) -> usize,
    pub(crate) normalize_root: fn(&str) -> String,
}

impl Engine {
    fn translate<'a>(&self, s: &'a str) -> Cow<'a, str> {
        if self.dos {
            crate::util::backslash_to_slash(s)
        } else {
            Cow::Borrowed(s)
        }
    }

    pub(crate) fn canonicalize(&self, s: &str) -> String {
        let translated = self.translate(s);
        let root_len = (self.root_len)(&translated);
        let root = (self.normalize_root)(&translated[..root_len]);
        let components = canonical::split_components(&translated[root_len..]);
        canonical::join_root_and_components(&root, &components)
    }

    pub(crate) fn is_root(&self, s: &str) -> bool {
        let translated = self.translate(s);
        let root_len = (self.root_len)(&translated);
        root_len > 0 && root_len == translated.len()
    }

    fn is_drive_relative_root(root: &str) -> bool {
        let bytes = root.as_bytes();
        root.len() == 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
    }

    pub(crate) fn is_absolute(&self, s: &str) -> bool {
        let translated = self.translate(s);
        let root_len = (self.root_len)(&translated);
        if root_len == 0 {
            return false;
        }
        !(self.dos && Self::is_drive_relative_root(&translated[..root_len]))
    }

    pub(crate) fn is_canonical(&self, s: &str) -> bool {
        self.canonicalize(s) == s
    }

    pub(crate) fn join(&self, base: &str, comp: &str) -> String {
        let translated_comp = self.translate(comp);
        let comp_root_len = (self.root_len)(&translated_comp);
        if comp_root_len == 0 {
            return self.canonicalize(&format!("{base}/{comp}"));
        }
        // On DOS, a bare leading separator names no drive of its own, so it attaches
        // to base's drive instead of discarding base outright. A drive-absolute,
        // drive-relative, or UNC comp still resets base completely.
        if self.dos && comp_root_len == 1 {
            let base_canon = self.canonicalize(base);
            let base_root_len = (self.root_len)(&base_canon);
            let base_root = &base_canon[..base_root_len];
            return self.canonicalize(&format!("{base_root}{comp}"));
        }
        self.canonicalize(comp)
    }

    pub(crate) fn join_many(&self, parts: &[&str]) -> String {
        let mut iter = parts.iter();
        let Some(first) = iter.next() else {
            return String::new();
        };
        let mut acc = self.canonicalize(first);
        for part in iter {
            acc = self.join(&acc, part);
        }
        acc
    }

    pub(crate) fn basename<'a>(&self, p: &'a str) -> &'a str {
        debug_assert!(self.is_canonical(p), "basename requires a canonical input");
        let root_len = (self.root_len)(p);
        if root_len == p.len() {
            return "";
        }
        let rest = &p[root_len..];
        match rest.rfind('/') {
            Some(idx) => &rest[idx + 1..],
            None => rest,
        }
    }

    pub(crate) fn dirname(&self, p: &str) -> String {
        debug_assert!(self.is_canonical(p), "dirname requires a canonical input");
        let root_len = (self.root_len)(p);
        if root_len == p.len() {
            return p.to_string();
        }
        let rest = &p[root_len..];
        match rest.rfind('/') {
            Some(idx) => p[..root_len + idx].to_string(),
            None => p[..root_len].to_string(),
        }
    }

    pub(crate) fn split<'a>(&self, p: &'a str) -> (String, &'a str) {
        (self.dirname(p), self.basename(p))
    }

    pub(crate) fn is_ancestor(&self, a: &str, b: &str) -> bool {
        debug_assert!(self.is_canonical(a) && self.is_canonical(b));
        ancestry::is_ancestor(a, b, self.is_root(b))
    }

    pub(crate) fn skip_ancestor(&self, a: &str, b: &str) -> String {
        debug_assert!(self.is_canonical(a) && self.is_canonical(b));
        ancestry::skip_ancestor(a, b, self.is_root(b))
    }

    pub(crate) fn is_child(&self, a: &str, b: &str) -> Option<String> {
        debug_assert!(self.is_canonical(a) && self.is_canonical(b));
        ancestry::is_child(a, b, self.is_root(b))
    }

    pub(crate) fn get_longest_ancestor(&self, a: &str, b: &str) -> String {
        debug_assert!(self.is_canonical(a) && self.is_canonical(b));
        ancestry::longest_common_ancestor(a, (self.root_len)(a), b, (self.root_len)(b))
    }

    pub(crate) fn condense_targets(&self, paths: &[&str]) -> (String, Vec<String>) {
        if paths.is_empty() {
            return (String::new(), Vec::new());
        }
        let canon: Vec<String> = paths.iter().map(|p| self.canonicalize(p)).collect();
        let mut ancestor = canon[0].clone();
        for p in &canon[1..] {
            ancestor = self.get_longest_ancestor(&ancestor, p);
        }
        let suffixes = canon.iter().map(|p| self.skip_ancestor(&ancestor, p)).collect();
        (ancestor, suffixes)
    }

    pub(crate) fn local_style(&self, s: &str) -> String {
        let c = self.canonicalize(s);
        if self.dos {
            c.chars().map(|ch| if ch == '/' { '\\' } else { ch }).collect()
        } else if c.is_empty() {
            ".".to_string()
        } else {
            c
        }
    }

    pub(crate) fn internal_style(&self, s: &str) -> String {
        self.canonicalize(s)
    }

    pub(crate) fn is_under_root(&self, base: &str, p: &str) -> (bool, Option<String>) {
        let base_canon = self.canonicalize(base);
        let translated_p = self.translate(p);
        let base_root_len = (self.root_len)(&base_canon);
        let mut stack: Vec<&str> = base_canon[base_root_len..]
            .split('/')
            .filter(|c| !c.is_empty())
            .collect();
        let base_depth = stack.len();
        for comp in translated_p.split('/') {
            if comp.is_empty() || comp == "." {
                continue;
            }
            if comp == ".." {
                if stack.len() <= base_depth {
                    return (false, None);
                }
                stack.pop();
            } else {
                stack.push(comp);
            }
        }
        let root = &base_canon[..base_root_len];
        let result = canonical::join_root_and_components(root, &stack);
        (true, Some(result))
    }
}

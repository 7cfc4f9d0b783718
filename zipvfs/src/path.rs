//! Lexical handling of slash-separated archive paths.
//!
//! Every path entering an index or a lookup goes through [`clean`] first,
//! so the rest of the crate only ever sees canonical names. The archive
//! root is the single token `"."`, distinct from any real file name.

/// Canonical name of the archive root directory.
pub const ROOT: &str = ".";

/// Returns the shortest lexically-equivalent form of `path`.
///
/// Repeated separators collapse, `.` segments disappear, and `..` segments
/// consume the segment before them. A leading `/` survives cleaning and a
/// leading run of `..` segments is kept as-is; neither form can name
/// anything inside an archive, so lookups on them miss. The empty path
/// cleans to [`ROOT`].
pub fn clean(path: &str) -> String {
    if path.is_empty() {
        return ROOT.to_string();
    }
    let rooted = path.starts_with('/');

    let mut out: Vec<&str> = Vec::new();
    // Number of leading ".." segments that can never be consumed.
    let mut dotdot = 0;
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if out.len() > dotdot {
                    out.pop();
                } else if !rooted {
                    out.push("..");
                    dotdot = out.len();
                }
            }
            _ => out.push(segment),
        }
    }

    let joined = out.join("/");
    if rooted {
        let mut cleaned = String::with_capacity(joined.len() + 1);
        cleaned.push('/');
        cleaned.push_str(&joined);
        cleaned
    } else if joined.is_empty() {
        ROOT.to_string()
    } else {
        joined
    }
}

/// Splits a cleaned path into its parent directory and final segment.
/// The parent comes back canonical as well: [`ROOT`] for a bare name,
/// `"/"` for a single rooted segment.
pub fn split(path: &str) -> (&str, &str) {
    match path.rfind('/') {
        Some(0) => ("/", &path[1..]),
        Some(index) => (&path[..index], &path[index + 1..]),
        None => (ROOT, path),
    }
}

/// Joins two path fragments with a separator and cleans the result.
/// An empty fragment contributes nothing.
pub fn join(dir: &str, name: &str) -> String {
    if dir.is_empty() {
        return clean(name);
    }
    if name.is_empty() {
        return clean(dir);
    }
    clean(&format!("{}/{}", dir, name))
}

/// Returns the final segment of a cleaned path; [`ROOT`] stays [`ROOT`]
/// and `"/"` stays `"/"`.
pub fn base(path: &str) -> &str {
    if path.is_empty() {
        return ROOT;
    }
    match path.rfind('/') {
        Some(index) if index + 1 < path.len() => &path[index + 1..],
        Some(_) => "/",
        None => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean() {
        let cases = [
            ("", "."),
            (".", "."),
            ("..", ".."),
            ("/", "/"),
            ("foo.txt", "foo.txt"),
            ("./foo.txt", "foo.txt"),
            ("1/", "1"),
            ("1//", "1"),
            ("1//2", "1/2"),
            ("1/./2", "1/2"),
            ("a/../b.txt", "b.txt"),
            ("a/b/../../c", "c"),
            ("a/b/..", "a"),
            ("a/..", "."),
            ("../foo.txt", "../foo.txt"),
            ("../../a", "../../a"),
            ("a/../../b", "../b"),
            ("/foo", "/foo"),
            ("/..", "/"),
            ("/a/../../b", "/b"),
        ];
        for (input, expected) in cases {
            assert_eq!(clean(input), expected, "clean({:?})", input);
        }
    }

    #[test]
    fn test_split() {
        assert_eq!(split("1/1/foo.txt"), ("1/1", "foo.txt"));
        assert_eq!(split("1/2"), ("1", "2"));
        assert_eq!(split("foo.txt"), (".", "foo.txt"));
        assert_eq!(split("/foo"), ("/", "foo"));
    }

    #[test]
    fn test_join() {
        assert_eq!(join(".", "foo.txt"), "foo.txt");
        assert_eq!(join("1", "2"), "1/2");
        assert_eq!(join("1/2", "foo.txt"), "1/2/foo.txt");
        assert_eq!(join("", "foo.txt"), "foo.txt");
        assert_eq!(join("1", ""), "1");
    }

    #[test]
    fn test_base() {
        assert_eq!(base("1/1/foo.txt"), "foo.txt");
        assert_eq!(base("foo.txt"), "foo.txt");
        assert_eq!(base("."), ".");
        assert_eq!(base("/"), "/");
        assert_eq!(base(""), ".");
    }
}

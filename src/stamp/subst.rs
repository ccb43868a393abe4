use quick_error::ResultExt;

use re;


quick_error! {
    #[derive(Debug)]
    pub enum Error {
        Regex(regex: String, err: re::Error) {
            display("can't compile regex {:?}: {}", regex, err)
            description("can't compile regular expression")
            context(regex: AsRef<str>, err: re::Error)
                -> (regex.as_ref().to_string(), err)
        }
        NoCapture(regex: String) {
            display("regex {:?} has no version capture group", regex)
            description("version regex doesn't contain a capture group")
        }
        EmptyVersion(regex: String) {
            display("regex {:?} captured an empty version", regex)
            description("captured empty version number")
        }
    }
}

#[derive(Debug)]
pub enum Outcome {
    /// New file content plus the text that was replaced.
    Changed(String, String),
    /// Pattern matched nothing, content kept as is.
    Unchanged,
}

/// Replaces the version captured by group 1 of the first match with
/// `version`, keeping the rest of the matched text. The new version is
/// inserted verbatim, it is never treated as a replacement template.
pub fn splice_version(content: &str, pattern: &str, version: &str)
    -> Result<Outcome, Error>
{
    let regex = re::compile(pattern).context(pattern)?;
    let capt = match regex.captures(content) {
        Some(capt) => capt,
        None => return Ok(Outcome::Unchanged),
    };
    let old = match capt.get(1) {
        Some(m) if m.start() == m.end() => {
            return Err(Error::EmptyVersion(pattern.to_string()));
        }
        Some(m) => m,
        None => return Err(Error::NoCapture(pattern.to_string())),
    };
    let mut text = String::with_capacity(content.len() + version.len());
    text.push_str(&content[..old.start()]);
    text.push_str(version);
    text.push_str(&content[old.end()..]);
    Ok(Outcome::Changed(text, old.as_str().to_string()))
}

/// Replaces the whole first match of `pattern` with the literal
/// `template`.
pub fn replace_literal(content: &str, pattern: &str, template: &str)
    -> Result<Outcome, Error>
{
    let regex = re::compile(pattern).context(pattern)?;
    let m = match regex.find(content) {
        Some(m) => m,
        None => return Ok(Outcome::Unchanged),
    };
    let mut text = String::with_capacity(
        content.len() - (m.end() - m.start()) + template.len());
    text.push_str(&content[..m.start()]);
    text.push_str(template);
    text.push_str(&content[m.end()..]);
    Ok(Outcome::Changed(text, m.as_str().to_string()))
}


#[cfg(test)]
mod test {
    use super::{splice_version, replace_literal, Error, Outcome};

    const TOC: &'static str = "\
        ## Interface: 100205\n\
        ## Title: Grind Companion\n\
        ## Version: 0.9.0\n\
        ## Notes: Tracks kills remaining until the next level\n";
    const LINE_RE: &'static str = r"(?m)^## Version: (.+)$";

    const README: &'static str = "\
        # Grind Companion\n\n\
        [![Version](https://img.shields.io/badge/version-0.9.0-blue.svg)]\
        (https://github.com/anthonygauthier/GrindCompanion/releases)\n";
    const BADGE_RE: &'static str =
        r"\[!\[Version\]\(https://img\.shields\.io/badge/version-[^-]+-blue\.svg\)\]";
    const BADGE: &'static str =
        "[![Version](https://img.shields.io/github/v/release\
         /anthonygauthier/GrindCompanion?label=version)]";

    fn splice(content: &str, version: &str) -> (String, String) {
        match splice_version(content, LINE_RE, version).unwrap() {
            Outcome::Changed(text, old) => (text, old),
            Outcome::Unchanged => panic!("expected a change"),
        }
    }

    #[test]
    fn splices_version_line() {
        let (text, old) = splice(TOC, "1.0.0");
        assert_eq!(old, "0.9.0");
        assert_eq!(text, TOC.replace("0.9.0", "1.0.0"));
    }

    #[test]
    fn splice_is_idempotent() {
        let (once, _) = splice(TOC, "1.0.0");
        let (twice, old) = splice(&once, "1.0.0");
        assert_eq!(old, "1.0.0");
        assert_eq!(once, twice);
    }

    #[test]
    fn splices_first_line_only() {
        let two = format!("{}## Version: 7.7.7\n", TOC);
        let (text, old) = splice(&two, "1.0.0");
        assert_eq!(old, "0.9.0");
        assert!(text.contains("## Version: 1.0.0\n"));
        assert!(text.contains("## Version: 7.7.7\n"));
    }

    #[test]
    fn version_is_inserted_verbatim() {
        let (text, _) = splice(TOC, r"1.0.0-$1\beta");
        assert!(text.contains(r"## Version: 1.0.0-$1\beta"));
    }

    #[test]
    fn no_version_line_is_unchanged() {
        let toc = "## Interface: 100205\n## Title: Grind Companion\n";
        match splice_version(toc, LINE_RE, "1.0.0").unwrap() {
            Outcome::Unchanged => {}
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn missing_capture_group_is_an_error() {
        match splice_version(TOC, r"(?m)^## Version: .+$", "1.0.0") {
            Err(Error::NoCapture(..)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn empty_captured_version_is_an_error() {
        match splice_version("## Version: \n", r"(?m)^## Version: (.*)$",
                             "1.0.0")
        {
            Err(Error::EmptyVersion(..)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn bad_pattern_is_an_error() {
        match splice_version(TOC, r"## Version: (", "1.0.0") {
            Err(Error::Regex(..)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn badge_is_replaced_wholesale() {
        match replace_literal(README, BADGE_RE, BADGE).unwrap() {
            Outcome::Changed(text, old) => {
                assert!(old.contains("badge/version-0.9.0-blue.svg"));
                assert!(text.contains("img.shields.io/github/v/release"));
                assert!(!text.contains("badge/version-"));
                assert!(text.ends_with(
                    "(https://github.com/anthonygauthier\
                     /GrindCompanion/releases)\n"));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn dynamic_badge_is_left_alone() {
        let updated = match replace_literal(README, BADGE_RE, BADGE).unwrap() {
            Outcome::Changed(text, _) => text,
            other => panic!("unexpected outcome: {:?}", other),
        };
        match replace_literal(&updated, BADGE_RE, BADGE).unwrap() {
            Outcome::Unchanged => {}
            other => panic!("unexpected outcome: {:?}", other),
        }
    }
}

use std::error::Error;
use std::fs::{File, read_to_string, remove_file, rename};
use std::io::{stderr, Write};
use std::path::{Path, PathBuf};

use config::Config;

use self::subst::Outcome;

pub mod subst;


/// Stamps `version` into the configured files.
///
/// Updates are staged as `<file>.tmp` siblings first and only renamed
/// into place once every substitution and write has succeeded, so a
/// failure on the second file never leaves the first one half-updated.
pub fn stamp(cfg: &Config, dir: &Path, version: &str, dry_run: bool)
    -> Result<(), Box<dyn Error>>
{
    let mut staged = Vec::new();
    let mut result = _stage(cfg, dir, version, &mut staged);
    let mut iter = staged.into_iter();
    if !dry_run && result.is_ok() {
        for (tmp, dest) in iter.by_ref() {
            match rename(&tmp, &dest) {
                Ok(()) => {}
                Err(e) => {
                    result = Err(format!(
                        "Error renaming file {:?}: {}", tmp, e).into());
                    remove_file(&tmp)
                    .or_else(|e| writeln!(&mut stderr(),
                        "Error removing file {:?}: {}", tmp, e)).ok();
                }
            }
        }
    }
    for (tmp, _) in iter {
        remove_file(&tmp)
        .or_else(|e| writeln!(&mut stderr(),
            "Error removing file {:?}: {}", tmp, e)).ok();
    }
    result
}

fn _stage(cfg: &Config, dir: &Path, version: &str,
    files: &mut Vec<(PathBuf, PathBuf)>)
    -> Result<(), Box<dyn Error>>
{
    let meta = dir.join(&cfg.metadata_path);
    let content = read_to_string(&meta)
        .map_err(|e| format!("{}: {}", meta.display(), e))?;
    match subst::splice_version(&content, &cfg.version_line_pattern, version)
        .map_err(|e| format!("{}: {}", meta.display(), e))?
    {
        Outcome::Changed(text, old) => {
            _write_tmp(&meta, &text, files)?;
            println!("{}: version {} -> {}",
                cfg.metadata_path.display(), old, version);
        }
        Outcome::Unchanged => {
            warn!("{}: no version line matched, file left unchanged",
                meta.display());
        }
    }

    let readme = dir.join(&cfg.readme_path);
    let content = read_to_string(&readme)
        .map_err(|e| format!("{}: {}", readme.display(), e))?;
    match subst::replace_literal(&content, &cfg.badge_pattern,
                                 &cfg.badge_template)
        .map_err(|e| format!("{}: {}", readme.display(), e))?
    {
        Outcome::Changed(text, old) => {
            _write_tmp(&readme, &text, files)?;
            debug!("{}: replaced badge {:?}", readme.display(), old);
            println!("{}: static version badge replaced",
                cfg.readme_path.display());
        }
        Outcome::Unchanged => {
            warn!("{}: no static version badge matched, file left unchanged",
                readme.display());
        }
    }
    Ok(())
}

fn _write_tmp(dest: &Path, text: &str, files: &mut Vec<(PathBuf, PathBuf)>)
    -> Result<(), Box<dyn Error>>
{
    let mut tmp = dest.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    let mut out = File::create(&tmp)
        .map_err(|e| format!("{}: {}", tmp.display(), e))?;
    files.push((tmp.clone(), dest.to_path_buf()));
    out.write_all(text.as_bytes())
        .map_err(|e| format!("{}: {}", tmp.display(), e))?;
    Ok(())
}

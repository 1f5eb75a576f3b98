//! See the [xtask spec](https://github.com/matklad/cargo-xtask).

use anyhow::{Result, anyhow, bail};
use pico_args::Arguments;
use std::path::Path;
use xshell::{Shell, cmd};


#[derive(Debug, Clone, Copy)]
enum Cmd {
  Help,
  Ci,
  Tag,
}

struct CmdSpec {
  name: &'static str,
  desc: &'static str,
  args: &'static [(&'static str, &'static str)],
}

impl Cmd {
  const VALUES: [Cmd; 3] = [Cmd::Help, Cmd::Ci, Cmd::Tag];

  fn spec(self) -> CmdSpec {
    match self {
      Cmd::Help => CmdSpec { name: "help", desc: "show this help", args: &[] },
      Cmd::Ci => CmdSpec { name: "ci", desc: "build, lint, and run the tests", args: &[] },
      Cmd::Tag => CmdSpec {
        name: "tag",
        desc: "set the workspace version, then commit a new tag",
        args: &[("<tag>", "the name of the tag, like v1.2.3")],
      },
    }
  }
}

impl std::str::FromStr for Cmd {
  type Err = anyhow::Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Cmd::VALUES
      .iter()
      .find(|c| c.spec().name == s)
      .copied()
      .ok_or_else(|| anyhow!("couldn't parse {s} into a command"))
  }
}

fn show_help() {
  println!("usage:");
  println!("  cargo xtask <command> [<args>]");
  println!();
  println!("commands:");
  for c in Cmd::VALUES {
    let spec = c.spec();
    println!("  {}", spec.name);
    println!("    {}", spec.desc);
    if !spec.args.is_empty() {
      println!();
      println!("    args:");
      for (name, desc) in spec.args {
        println!("      {name}");
        println!("        {desc}");
      }
    }
  }
}

fn finish_args(args: Arguments) -> Result<()> {
  let args = args.finish();
  if !args.is_empty() {
    bail!("unused arguments: {args:?}")
  }
  Ok(())
}

fn run_ci(sh: &Shell) -> Result<()> {
  cmd!(sh, "cargo build").run()?;
  cmd!(sh, "cargo fmt -- --check").run()?;
  cmd!(sh, "cargo clippy").run()?;
  cmd!(sh, "cargo test").run()?;
  Ok(())
}

/// Checks `tag` is `v` then three dot-separated numbers, and returns the part after the `v`.
fn version_of(tag: &str) -> Result<&str> {
  let Some(version) = tag.strip_prefix('v') else { bail!("tag must start with v") };
  let version_parts: Vec<_> = version.split('.').collect();
  let num_parts = version_parts.len();
  if num_parts != 3 {
    bail!("version must have 3 dot-separated parts (got {num_parts})")
  }
  for part in version_parts {
    if let Err(e) = part.parse::<u16>() {
      bail!("{part}: not a non-negative 16-bit integer: {e}")
    }
  }
  Ok(version)
}

/// Rewrites the `version` line of `[workspace.package]` in the root manifest.
fn set_version(contents: &str, version: &str) -> Result<String> {
  let mut out = String::with_capacity(contents.len());
  let mut in_package = false;
  let mut done = false;
  for line in contents.lines() {
    if line.starts_with('[') {
      in_package = line.trim() == "[workspace.package]";
    }
    let is_version = line.split_once('=').is_some_and(|(key, _)| key.trim() == "version");
    if in_package && !done && is_version {
      out.push_str("version = \"");
      out.push_str(version);
      out.push('"');
      done = true;
    } else {
      out.push_str(line);
    }
    out.push('\n');
  }
  if !done {
    bail!("no version in [workspace.package]")
  }
  Ok(out)
}

fn main() -> Result<()> {
  let mut args = Arguments::from_env();
  let sh = Shell::new()?;
  if args.contains(["-h", "--help"]) {
    show_help();
    return Ok(());
  }
  let cmd: Cmd = match args.subcommand()? {
    Some(x) => x.parse()?,
    None => {
      show_help();
      return Ok(());
    }
  };
  let root = Path::new(env!("CARGO_MANIFEST_DIR")).parent().ok_or_else(|| anyhow!("no parent"))?;
  let _d = sh.push_dir(root);
  match cmd {
    Cmd::Help => show_help(),
    Cmd::Ci => {
      finish_args(args)?;
      run_ci(&sh)?;
    }
    Cmd::Tag => {
      let tag: String = args.free_from_str()?;
      finish_args(args)?;
      let version = version_of(&tag)?;
      let manifest = "Cargo.toml";
      let contents = sh.read_file(manifest)?;
      sh.write_file(manifest, set_version(&contents, version)?)?;
      // keep the lock file in sync with the new version
      cmd!(sh, "cargo update --workspace").run()?;
      cmd!(sh, "git add Cargo.toml Cargo.lock").run()?;
      let msg = format!("Release {tag}");
      cmd!(sh, "git commit -m {msg} --no-verify").run()?;
      cmd!(sh, "git tag {tag}").run()?;
      run_ci(&sh)?;
    }
  }
  Ok(())
}

// src/cli.rs
use std::{
    env,
    error::Error,
    fs,
    io::{self, Write},
    path::PathBuf,
};

use crate::config::options::{Options, RoleTerms};
use crate::core::Page;
use crate::session::Session;
use crate::store::{ChangeFlag, FileStore, OptionsStore};
use crate::terms::TermMap;

const HELP: &str = "\
Usage: cli --in <page.html> [options]

  -i, --in <file>       Dance page to rewrite (required unless --terms)
  -o, --out <file>      Write the rewritten page here (default: stdout)
      --options <file>  Options file (default: .store/options.txt)
      --roles <name>    Role terms: birds | lf | lg | mw
      --no-rsr          Leave gypsies and double gyps alone
      --disable         Run with substitutions switched off
      --terms           Print the resolved terminology map and exit
      --report          Print per-rule change counts to stderr
  -h, --help            This text";

#[derive(Clone, Debug, Default)]
pub struct Params {
    pub input: Option<PathBuf>,
    pub out: Option<PathBuf>,
    pub options_file: Option<PathBuf>,
    pub roles: Option<RoleTerms>,     // override stored roleTerms
    pub no_rsr: bool,                 // override stored useRSR
    pub disable: bool,                // override stored enabled
    pub print_terms: bool,
    pub report: bool,
}

impl Params {
    /// Stored options with this run's overrides on top.
    pub fn resolve_options(&self, mut opts: Options) -> Options {
        if let Some(r) = &self.roles { opts.role_terms = r.clone(); }
        if self.no_rsr { opts.use_rsr = false; }
        if self.disable { opts.enabled = false; }
        opts
    }
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let params = parse_args(env::args().skip(1))?;
    run_with(&params)
}

pub fn run_with(params: &Params) -> Result<(), Box<dyn Error>> {
    let store = match &params.options_file {
        Some(p) => FileStore::new(p),
        None => FileStore::default(),
    };
    let options = params.resolve_options(store.options()?);

    if params.print_terms {
        let mut out = io::stdout().lock();
        for (key, term) in TermMap::build(&options).iter() {
            writeln!(out, "{key}={term}")?;
        }
        return Ok(());
    }

    let input = params.input.as_ref().ok_or("Missing --in <page.html>")?;
    let html = fs::read_to_string(input)
        .map_err(|e| format!("Could not read {}: {}", input.display(), e))?;

    let html_out = rewrite(&html, &options, params.report)?;

    match &params.out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(path, html_out)?;
            eprintln!("Wrote {}", path.display());
        }
        None => io::stdout().lock().write_all(html_out.as_bytes())?,
    }
    Ok(())
}

/// Apply `options` to a page once and serialize. One-shot: no store, no
/// change subscription.
pub fn rewrite(html: &str, options: &Options, report: bool) -> Result<String, Box<dyn Error>> {
    let mut session = Session::new(Page::parse(html), options.clone(), ChangeFlag::default())?;
    let summary = session.apply();
    if report {
        for o in &summary.outcomes {
            match o.changes {
                Some(n) => eprintln!("{:<34}{n}", o.rule),
                None => eprintln!("{:<34}skipped", o.rule),
            }
        }
    }
    session.page().to_html()
}

pub fn parse_args<I>(args: I) -> Result<Params, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut params = Params::default();
    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "-i" | "--in" => params.input = Some(PathBuf::from(args.next().ok_or("Missing input path")?)),
            "-o" | "--out" => params.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?)),
            "--options" => {
                let v = args.next().ok_or("Missing value for --options")?;
                params.options_file = Some(PathBuf::from(v));
            }
            "--roles" => {
                let v = args.next().ok_or("Missing value for --roles")?;
                params.roles = Some(RoleTerms::parse(&v.to_ascii_lowercase()));
            }
            "--no-rsr" => params.no_rsr = true,
            "--disable" => params.disable = true,
            "--terms" => params.print_terms = true,
            "--report" => params.report = true,
            "-h" | "--help" => {
                eprintln!("{HELP}");
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }
    if params.input.is_none() && !params.print_terms {
        return Err("Specify --in <page.html> (or --terms)".into());
    }
    Ok(params)
}

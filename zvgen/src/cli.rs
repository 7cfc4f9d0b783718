use clap;

pub fn parse_flags<'a>() -> clap::ArgMatches<'a> {
    clap::App::new("zvgen")
        .version(clap::crate_version!())
        .about("Packs a directory of static assets into an embeddable archive string")
        .arg(clap::Arg::from_usage("-d --debug 'Enable debug output'"))
        .arg(
            clap::Arg::from_usage("--var [name] 'Name of the generated constant'")
                .default_value("FILE_SYSTEM"),
        )
        .arg(clap::Arg::from_usage("<SOURCE> 'Directory to pack'"))
        .arg(clap::Arg::from_usage(
            "<OUTPUT> 'Path of the Rust source file to generate'",
        ))
        .get_matches()
}

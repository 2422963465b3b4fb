use crate::*;

pub fn handle_fact_commands(cli: &Cli, config: &ConfigFile) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Resolve { facts } => {
            let placement = resolve(&facts_from_args(facts))?;
            print_one(cli.json, placement, |p| {
                format!("{}\t{}\t{}", p.path, p.owner, p.group)
            })?;
        }
        Commands::Render { metadata } => {
            let meta = into_metadata(params_from_args(metadata)?);
            let document = render_document(&meta)?;
            if cli.json {
                let report = RenderReport {
                    sha256: digest(&document),
                    keys: document_keys(&meta)?,
                    document,
                };
                print_one(true, report, |_| String::new())?;
            } else {
                print!("{}", document);
            }
        }
        Commands::Validate { metadata } => {
            let meta = into_metadata(params_from_args(metadata)?);
            validate(&meta)?;
            let report = ValidateReport {
                valid: true,
                keys: document_keys(&meta)?,
            };
            print_one(cli.json, report, |r| {
                format!("metadata valid ({})", r.keys.join(", "))
            })?;
        }
        Commands::Apply {
            facts,
            metadata,
            root,
            ownership,
        } => {
            let meta = into_metadata(params_from_args(metadata)?);
            let placement = resolve(&facts_from_args(facts))?;
            let target = target_path(&placement, root.as_deref());
            let mode = ownership
                .or(config.general.ownership)
                .unwrap_or(OwnershipMode::Enforce);

            let report = render(&meta, &placement, &target, mode)?;
            if config.general.audit {
                audit("apply", serde_json::to_value(&report)?);
            }
            print_one(cli.json, report, |r| {
                format!("{}\t{}", format!("{:?}", r.status).to_lowercase(), r.path)
            })?;
        }
        Commands::Show { facts, root } => {
            let placement = resolve(&facts_from_args(facts))?;
            let target = target_path(&placement, root.as_deref());
            let meta = read_fact_file(&target)?;
            if cli.json {
                print_one(true, meta, |_| String::new())?;
            } else {
                print!("{}", serde_yaml::to_string(&meta)?);
            }
        }
    }

    Ok(())
}

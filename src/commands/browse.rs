use crate::*;

pub fn handle_browse_commands(
    cli: &Cli,
    config: &ConfigFile,
    catalog: &Catalog,
    source: &str,
) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Search {
            query,
            scripts,
            category,
            tier,
            languages,
        } => {
            let state = FilterState {
                category: category
                    .clone()
                    .unwrap_or_else(|| config.general.default_category.clone()),
                tier: TierFilter::parse(tier)?,
                languages: languages.iter().cloned().collect(),
                query: query.clone().unwrap_or_default(),
            };
            if *scripts {
                let rows: Vec<ScriptSummary> = filter(&catalog.scripts, &state)
                    .into_iter()
                    .map(ScriptSummary::from)
                    .collect();
                emit_rows(cli.json, &rows, "no matching scripts", |s| {
                    format!("{}\t{}\t{}", s.id, s.tier, s.title)
                })?;
            } else {
                let rows: Vec<KitSummary> = filter(&catalog.kits, &state)
                    .into_iter()
                    .map(KitSummary::from)
                    .collect();
                emit_rows(cli.json, &rows, "no matching kits", |k| {
                    format!("{}\t{}\t{}", k.id, k.category, k.name)
                })?;
            }
        }
        Commands::Languages => {
            let rows = counts(catalog.script_languages());
            emit_rows(cli.json, &rows, "no languages", |c| {
                format!("{}\t{}", c.name, c.count)
            })?;
        }
        Commands::Categories { scripts } => {
            let map = if *scripts {
                catalog.script_categories()
            } else {
                catalog.kit_categories()
            };
            let rows = counts(map);
            emit_rows(cli.json, &rows, "no categories", |c| {
                format!("{}\t{}", c.name, c.count)
            })?;
        }
        Commands::Show { id, scripts, tab } => {
            if *scripts {
                let s = catalog.script(id)?;
                match tab {
                    Some(tab) => {
                        let section = ScriptSection {
                            script: s.id.clone(),
                            tab: format!("{:?}", tab).to_lowercase(),
                            text: script_section(s, *tab),
                        };
                        emit(cli.json, section, |sec| {
                            sec.text.clone().unwrap_or_else(|| "(empty)".to_string())
                        })?;
                    }
                    None => emit(cli.json, s, script_text)?,
                }
            } else {
                let k = catalog.kit(id)?;
                emit(cli.json, k, kit_text)?;
            }
        }
        Commands::Tree {
            kit,
            expand,
            expand_all,
            search,
            select,
            summary: as_summary,
        } => {
            let k = catalog.kit(kit)?;
            if *as_summary {
                let text = summary(&k.name, &k.structure);
                emit(cli.json, text, |t| t.clone())?;
                return Ok(());
            }
            let mut view = TreeView::default();
            if *expand_all {
                view.expand_all(&k.structure);
            }
            for p in expand {
                let folder = resolve(&k.structure, p).is_some_and(|n| n.is_folder());
                match rendered_path(&k.structure, p) {
                    Some(path) if folder => view.expand(&path),
                    _ => log::warn!("kit {}: no folder `{}` to expand", k.id, p),
                }
            }
            if let Some(term) = search {
                view.search = term.clone();
            }
            if let Some(p) = select {
                match rendered_path(&k.structure, p) {
                    Some(path) => view.select(&path),
                    None => log::warn!("kit {}: no file `{}` to select", k.id, p),
                }
            }
            let rows = view.rows(&k.structure);
            emit_rows(cli.json, &rows, "no matching files", tree_row_text)?;
        }
        Commands::File { kit, path } => {
            let k = catalog.kit(kit)?;
            let found = preview(&k.structure, path);
            if found.is_none() {
                log::debug!("kit {}: `{}` did not resolve", k.id, path);
            }
            emit(cli.json, found, |p| match p {
                Some(p) => preview_text(p),
                None => "nothing selected".to_string(),
            })?;
        }
        Commands::Sandbox { kit } => {
            let k = catalog.kit(kit)?;
            let link = SandboxLink {
                kit: k.id,
                repository: k.github_link.as_deref().and_then(repo_path),
                url: sandbox_url(k.github_link.as_deref()),
            };
            emit(cli.json, link, |l| match &l.url {
                Some(url) => url.clone(),
                None => format!("no sandbox link for kit {}", l.kit),
            })?;
        }
        Commands::Validate => {
            validate(catalog)?;
            let report = ValidateReport {
                catalog: source.to_string(),
                kits: catalog.kits.len(),
                scripts: catalog.scripts.len(),
            };
            emit(cli.json, report, |r| {
                format!("catalog valid ({} kits, {} scripts)", r.kits, r.scripts)
            })?;
        }
        Commands::Recommend { .. } | Commands::Quiz => {}
    }
    Ok(())
}

fn counts(map: std::collections::BTreeMap<String, usize>) -> Vec<FacetCount> {
    map.into_iter()
        .map(|(name, count)| FacetCount { name, count })
        .collect()
}

fn script_section(s: &Script, tab: ScriptTab) -> Option<String> {
    match tab {
        ScriptTab::Readme => s.readme.clone(),
        ScriptTab::Code => s.code.main.clone(),
        ScriptTab::Requirements => s.code.requirements.clone(),
        ScriptTab::Usage => s.usage.clone(),
    }
}

fn kit_text(k: &&Kit) -> String {
    let mut lines = vec![
        format!("id: {}", k.id),
        format!("name: {}", k.name),
        format!("category: {}", k.category),
        format!("description: {}", k.description),
    ];
    if !k.tags.is_empty() {
        lines.push(format!("tags: {}", k.tags.join(", ")));
    }
    if let Some(level) = &k.skill_level {
        lines.push(format!("skill level: {}", level));
    }
    if !k.use_cases.is_empty() {
        lines.push(format!("use cases: {}", k.use_cases.join("; ")));
    }
    lines.push(format!(
        "repository: {}",
        k.github_link.as_deref().unwrap_or("n/a")
    ));
    lines.join("\n")
}

fn script_text(s: &&Script) -> String {
    let mut lines = vec![
        format!("id: {}", s.id),
        format!("title: {}", s.title),
        format!("category: {}", s.category),
        format!("tier: {}", s.display_tier()),
        format!("language: {}", s.language.as_deref().unwrap_or("n/a")),
        format!("description: {}", s.description),
    ];
    if !s.models.is_empty() {
        lines.push(format!("models: {}", s.models.join(", ")));
    }
    if !s.use_cases.is_empty() {
        lines.push(format!("use cases: {}", s.use_cases.join("; ")));
    }
    if let Some(why) = &s.why {
        lines.push(format!("why: {}", why));
    }
    lines.join("\n")
}

fn tree_row_text(r: &TreeRow) -> String {
    let icon = match r.kind {
        NodeKind::Folder if r.expanded => "▾ 📁",
        NodeKind::Folder => "▸ 📁",
        NodeKind::File => "  📄",
    };
    let mut line = format!("{}{} {}", "  ".repeat(r.depth), icon, r.name);
    if r.important {
        line.push_str(" ★");
    }
    if r.selected {
        line.push_str("  <");
    }
    line
}

fn preview_text(p: &FilePreview) -> String {
    let mut out = format!("{}\n{}\n", p.name, p.path);
    if let Some(d) = &p.description {
        out.push_str(&format!("\n{}\n", d));
    }
    if let Some(c) = &p.content {
        out.push_str(&format!("\n```{}\n{}\n```\n", p.language, c));
    }
    out
}

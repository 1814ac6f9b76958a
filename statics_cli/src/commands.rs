//! Subcommand implementations. Each one reads its input, calls into
//! `statics_core` and prints either a text report or JSON.

use std::collections::HashMap;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::Serialize;

use statics_core::calculations::beam::equilibrium_residual;
use statics_core::calculations::diagrams::analyze_with;
use statics_core::calculations::{BeamConfig, TrussModel};
use statics_core::checks::{check_bending_stress, check_compressive_stress, StressCheck};
use statics_core::loads::{summarize, Load, LoadSymbol};
use statics_core::materials::{self, Material};
use statics_core::units::{self, Unit};
use statics_core::AnalysisSettings;

/// Read a file, or stdin when the path is "-"
fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        return Ok(buf);
    }
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

pub fn load_settings(path: Option<&Path>) -> Result<AnalysisSettings> {
    match path {
        Some(path) => {
            let text = read_input(path)?;
            let settings = AnalysisSettings::from_json(&text)?;
            info!("Loaded settings from {}", path.display());
            Ok(settings)
        }
        None => Ok(AnalysisSettings::default()),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn run_beam(input: &Path, settings: &AnalysisSettings, json: bool) -> Result<()> {
    let text = read_input(input)?;
    let config: BeamConfig = serde_json::from_str(&text)
        .with_context(|| format!("invalid beam configuration in {}", input.display()))?;
    debug!(
        "Beam: L = {} m, {} supports, {} loads",
        config.length,
        config.supports.len(),
        config.loads.len()
    );

    let results = analyze_with(&config, settings.diagram_subdivisions)?;
    let (force_residual, moment_residual) = equilibrium_residual(&config, &results.reactions, 0.0);
    if !settings.accepts_residual(force_residual, moment_residual) {
        warn!(
            "Equilibrium residual above tolerance: ΣF = {:.3e}, ΣM = {:.3e}",
            force_residual, moment_residual
        );
    }

    if json {
        return print_json(&results);
    }

    println!("Beam analysis (L = {:.3} m)", config.length);
    println!("==========================");
    println!();
    println!("Loads:");
    for load in &config.loads {
        match load {
            Load::Moment { position, magnitude } => {
                println!("  {}: {:.3} kN·m at {:.3} m", load.display_name(), magnitude, position)
            }
            _ => println!(
                "  {}: {:.3} kN acting at {:.3} m",
                load.display_name(),
                load.resultant(),
                load.centroid().unwrap_or_default()
            ),
        }
    }
    println!();
    println!("Reactions:");
    for r in &results.reactions {
        let support = &config.supports[r.support_index];
        print!(
            "  {} at x = {:.3} m: V = {:.3} kN",
            support.kind, support.position, r.vertical
        );
        if support.kind.restrains_rotation() {
            print!(", M = {:.3} kN·m", r.moment);
        }
        println!();
    }
    println!();
    println!(
        "Shear:  max {:.3} kN at {:.3} m, min {:.3} kN at {:.3} m",
        results.max_shear.value,
        results.max_shear.position,
        results.min_shear.value,
        results.min_shear.position
    );
    println!(
        "Moment: max {:.3} kN·m at {:.3} m, min {:.3} kN·m at {:.3} m",
        results.max_moment.value,
        results.max_moment.position,
        results.min_moment.value,
        results.min_moment.position
    );
    println!();
    println!(
        "Equilibrium check: ΣF = {:.2e} kN, ΣM = {:.2e} kN·m",
        force_residual, moment_residual
    );
    Ok(())
}

pub fn run_truss(input: &Path, settings: &AnalysisSettings, json: bool) -> Result<()> {
    let text = read_input(input)?;
    let model: TrussModel = serde_json::from_str(&text)
        .with_context(|| format!("invalid truss model in {}", input.display()))?;

    let result = model.solve_with(&settings.truss)?;

    if json {
        return print_json(&result);
    }

    println!(
        "Truss analysis ({} nodes, {} members)",
        model.nodes.len(),
        model.members.len()
    );
    println!("=====================================");
    println!();
    println!("{:<12} {:>12}  {}", "Member", "Force (kN)", "Kind");
    for mf in &result.member_forces {
        println!("{:<12} {:>12.3}  {}", mf.member_id, mf.force, mf.kind);
    }
    println!();
    println!("{:<12} {:>12} {:>12}", "Node", "ux", "uy");
    for d in &result.displacements {
        println!("{:<12} {:>12.5} {:>12.5}", d.node_id, d.ux, d.uy);
    }
    println!();
    println!("{:<12} {:>12} {:>12}", "Support", "Rx (kN)", "Ry (kN)");
    for r in &result.reactions {
        println!("{:<12} {:>12.3} {:>12.3}", r.node_id, r.rx, r.ry);
    }
    Ok(())
}

pub fn run_combos(dead: f64, live: f64, wind: f64, snow: f64, json: bool) -> Result<()> {
    let loads: HashMap<LoadSymbol, f64> = [
        (LoadSymbol::G, dead),
        (LoadSymbol::Q, live),
        (LoadSymbol::W, wind),
        (LoadSymbol::S, snow),
    ]
    .into_iter()
    .collect();

    let summary = summarize(&loads);

    if json {
        return print_json(&summary);
    }

    println!("{:<10} {:<28} {:>12}  {}", "Name", "Equation", "Value", "State");
    for r in &summary.results {
        let state = if r.is_ultimate { "ULS" } else { "SLS" };
        println!("{:<10} {:<28} {:>12.3}  {}", r.name, r.equation, r.value, state);
    }
    println!();
    match &summary.critical {
        Some(c) => println!("Critical: {} ({}) = {:.3}", c.name, c.equation, c.value),
        None => println!("Critical: none"),
    }
    if let Some(min) = summary.minimum.as_ref().filter(|m| m.value < 0.0) {
        println!("Net uplift: {} ({}) = {:.3}", min.name, min.equation, min.value);
    }
    Ok(())
}

#[derive(Serialize)]
struct MaterialReport {
    material: Material,
    name: String,
    properties: materials::MaterialProperties,
    design_compressive_strength: f64,
    design_bending_strength: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    compressive_check: Option<StressCheck>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bending_check: Option<StressCheck>,
}

fn print_check(label: &str, check: &StressCheck) {
    println!(
        "  {:<12} {:.2} / {:.2} MPa = {:.3}  {}",
        label,
        check.demand_mpa,
        check.capacity_mpa,
        check.ratio,
        if check.passes { "OK" } else { "FAILS" }
    );
}

pub fn run_material(
    grade: Option<&str>,
    stress: Option<f64>,
    settings: &AnalysisSettings,
    json: bool,
) -> Result<()> {
    let grade = match (grade, stress) {
        (Some(g), _) => g,
        (None, Some(_)) => settings.default_material.as_str(),
        (None, None) => return list_catalog(json),
    };

    let material = materials::lookup(grade)?;
    let report = MaterialReport {
        name: material.display_name(),
        properties: material.properties(),
        design_compressive_strength: material.design_compressive_strength(),
        design_bending_strength: material.design_bending_strength(),
        compressive_check: stress.map(|s| check_compressive_stress(&material, s)),
        bending_check: stress.map(|s| check_bending_stress(&material, s)),
        material,
    };

    if json {
        return print_json(&report);
    }

    let p = &report.properties;
    println!("{} ({})", report.name, report.material.family());
    println!("  fc = {:.1} MPa, ft = {:.1} MPa, fb = {:.1} MPa", p.fc_mpa, p.ft_mpa, p.fb_mpa);
    println!("  E = {:.1} GPa, G = {:.2} GPa, ν = {:.2}", p.e_gpa, p.g_gpa, p.poisson_ratio);
    println!(
        "  α = {:.1e} /°C, γ = {:.2} kN/m³",
        p.thermal_coefficient, p.unit_weight_kn_m3
    );
    println!(
        "  Design strengths: compression {:.2} MPa, bending {:.2} MPa",
        report.design_compressive_strength, report.design_bending_strength
    );
    if let (Some(c), Some(b)) = (&report.compressive_check, &report.bending_check) {
        println!();
        println!("Stress checks:");
        print_check("compression", c);
        print_check("bending", b);
    }
    Ok(())
}

fn list_catalog(json: bool) -> Result<()> {
    let catalog = materials::catalog();
    if json {
        return print_json(&catalog);
    }
    println!("{:<10} {:<10} {}", "Grade", "Family", "Name");
    for m in catalog {
        println!("{:<10} {:<10} {}", m.grade(), m.family(), m.display_name());
    }
    Ok(())
}

#[derive(Serialize)]
struct Conversion {
    value: f64,
    from: String,
    result: f64,
    to: String,
}

pub fn run_convert(value: f64, from: &str, to: &str, json: bool) -> Result<()> {
    let from_unit: Unit = from.parse()?;
    let to_unit: Unit = to.parse()?;
    let result = units::convert(value, from_unit, to_unit)?;

    if json {
        return print_json(&Conversion {
            value,
            from: from_unit.symbol().to_string(),
            result,
            to: to_unit.symbol().to_string(),
        });
    }
    println!("{} {} = {} {}", value, from_unit, result, to_unit);
    Ok(())
}

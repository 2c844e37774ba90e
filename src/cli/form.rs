use super::ui;
use crate::config::AppConfig;
use crate::countries::CountryProvider;
use crate::form::ConverterForm;
use crate::rates::RateProvider;
use anyhow::Result;
use console::{Term, style};

/// Interactive converter session: load currencies once, resolve flags,
/// then prompt for From/To/Amount until the user exits with an empty
/// From entry.
pub async fn run(
    rate_provider: &(dyn RateProvider + Send + Sync),
    country_provider: &(dyn CountryProvider + Send + Sync),
    config: &AppConfig,
) -> Result<()> {
    let term = Term::stdout();
    term.write_line(&ui::style_text("Currency Converter", ui::StyleType::Title))?;

    let mut form = ConverterForm::new();
    super::load_currencies(&mut form, rate_provider, country_provider, config).await;

    if form.currencies().is_empty() {
        term.write_line(&ui::style_text(
            "No currencies available.",
            ui::StyleType::Subtle,
        ))?;
    } else {
        term.write_line(&ui::style_text(
            &format!(
                "{} currencies available (run `fxc currencies` for the full list).",
                form.currencies().len()
            ),
            ui::StyleType::Subtle,
        ))?;
    }
    term.write_line(&ui::style_text(
        "Press Enter on an empty From entry to exit.",
        ui::StyleType::Subtle,
    ))?;
    term.write_line("")?;

    loop {
        let from = prompt_code(&term, "From")?;
        if from.is_empty() {
            break;
        }
        form.set_from(&from);
        show_flag(&term, &form, &from)?;

        let to = prompt_code(&term, "To")?;
        form.set_to(&to);
        show_flag(&term, &form, &to)?;

        let amount = prompt_value(&term, "Amount")?;
        form.set_amount(&amount);

        if let Some((token, request)) = form.begin_conversion() {
            let outcome = rate_provider.fetch_rates(&request.from).await;
            form.apply_rates(token, outcome);
        }

        super::convert::render_outcome(&form);
        term.write_line("")?;
    }

    Ok(())
}

fn prompt_code(term: &Term, label: &str) -> Result<String> {
    term.write_str(&format!("{}: ", style(label).bold()))?;
    Ok(term.read_line()?.trim().to_uppercase())
}

fn prompt_value(term: &Term, label: &str) -> Result<String> {
    term.write_str(&format!("{}: ", style(label).bold()))?;
    Ok(term.read_line()?)
}

fn show_flag(term: &Term, form: &ConverterForm, code: &str) -> Result<()> {
    if let Some(url) = form.flag(code) {
        term.write_line(&ui::style_text(&format!("  {url}"), ui::StyleType::Subtle))?;
    }
    Ok(())
}

use super::ui;
use crate::form::ConverterForm;
use crate::rates::RateProvider;
use anyhow::Result;

/// One-shot conversion through the same form transitions the interactive
/// session uses.
pub async fn run(
    rate_provider: &(dyn RateProvider + Send + Sync),
    from: &str,
    to: &str,
    amount: &str,
) -> Result<()> {
    let mut form = ConverterForm::new();
    form.set_from(&from.trim().to_uppercase());
    form.set_to(&to.trim().to_uppercase());
    form.set_amount(amount);

    if let Some((token, request)) = form.begin_conversion() {
        let outcome = rate_provider.fetch_rates(&request.from).await;
        form.apply_rates(token, outcome);
    }

    render_outcome(&form);
    Ok(())
}

/// Prints the error and/or the result line. Both can be visible at once:
/// a failed attempt leaves the previous result on screen.
pub(super) fn render_outcome(form: &ConverterForm) {
    if let Some(error) = form.error() {
        println!("{}", ui::style_text(error, ui::StyleType::Error));
    }
    if let Some(line) = form.result_line() {
        println!("{}", ui::style_text(&line, ui::StyleType::Result));
    }
}

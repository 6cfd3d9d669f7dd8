use crate::common::*;
use crate::traits::service_traits::chart_service::*;
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::dto::{decade_count_map::*, histogram_plan::*};
use crate::enums::output_format::*;
use crate::model::{configs::chart_config::*, search::search_term::*};
use crate::utils_modules::text_utils::*;

#[derive(Debug, Clone, new)]
pub struct ChartServiceImpl {
    chart_config: ChartConfig,
}

impl ChartServiceImpl {
    #[doc = "`<output_dir>/<term_slug>_decade_histogram.<ext>`"]
    pub fn default_output_path(&self, term: &SearchTerm) -> PathBuf {
        PathBuf::from(self.chart_config.output_dir()).join(format!(
            "{}_decade_histogram.{}",
            slugify(term.as_str()),
            self.chart_config.file_extension()
        ))
    }
}

#[doc = r#"
    Draws `plan` onto `root` as a vertical bar chart.

    The x axis is a segmented index over the bars, so every bar gets exactly one tick,
    centred under it and labelled with its decade. Missing values have height zero and
    draw nothing.
"#]
fn draw_histogram<DB>(
    root: &DrawingArea<DB, Shift>,
    plan: &HistogramPlan,
    chart_config: &ChartConfig,
) -> anyhow::Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    /* integer ranges are inclusive, so the last bar index closes the axis */
    let last_index: i32 = plan.bars().len() as i32 - 1;
    let x_ticks: Vec<String> = plan.x_ticks();
    let [r, g, b] = *chart_config.bar_color();

    let bar_color: RGBColor = RGBColor(r, g, b);
    let grid_color: RGBColor = RGBColor(220, 220, 220);
    let text_color: RGBColor = RGBColor(40, 40, 40);

    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(root)
        .caption(
            plan.title(),
            ("sans-serif", 36).into_font().color(&text_color),
        )
        .margin(30)
        .x_label_area_size(70)
        .y_label_area_size(100)
        .build_cartesian_2d((0..last_index).into_segmented(), 0u64..plan.y_upper_bound())?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(plan.x_desc())
        .y_desc(plan.y_desc())
        .x_labels(x_ticks.len())
        .y_labels(10)
        .axis_style(ShapeStyle::from(&RGBColor(120, 120, 120)).stroke_width(2))
        .light_line_style(ShapeStyle::from(&grid_color).stroke_width(1))
        .bold_line_style(ShapeStyle::from(&grid_color).stroke_width(1))
        .x_label_style(("sans-serif", 16).into_font().color(&text_color))
        .y_label_style(("sans-serif", 18).into_font().color(&text_color))
        .x_label_formatter(&|x| match x {
            SegmentValue::CenterOf(i) if *i >= 0 && (*i as usize) < x_ticks.len() => {
                x_ticks[*i as usize].clone()
            }
            _ => String::new(),
        })
        .y_label_formatter(&|y| format_number(*y))
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(bar_color.filled())
            .margin(*chart_config.bar_margin())
            .data(
                plan.bars()
                    .iter()
                    .enumerate()
                    .map(|(i, bar)| (i as i32, *bar.height())),
            ),
    )?;

    root.present()?;
    Ok(())
}

#[async_trait]
impl ChartService for ChartServiceImpl {
    fn build_histogram_plan(
        &self,
        term: &SearchTerm,
        counts: &DecadeCountMap,
    ) -> anyhow::Result<HistogramPlan> {
        HistogramPlan::build(term, counts)
    }

    async fn render_histogram(
        &self,
        term: &SearchTerm,
        counts: &DecadeCountMap,
        output_path: &Path,
    ) -> anyhow::Result<PathBuf> {
        let plan: HistogramPlan = self.build_histogram_plan(term, counts)?;

        let missing: Vec<i32> = counts.missing_decades();
        if !missing.is_empty() {
            warn!(
                "[ChartServiceImpl->render_histogram] {} decade(s) without a count are drawn as zero: {:?}",
                missing.len(),
                missing
            );
        }

        /* Create parent directory if it doesn't exist */
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let output_path_buf: PathBuf = output_path.to_path_buf();
        let chart_config: ChartConfig = self.chart_config.clone();
        let size: (u32, u32) = (*chart_config.width(), *chart_config.height());

        let handle: tokio::task::JoinHandle<Result<(), anyhow::Error>> =
            tokio::task::spawn_blocking(move || match OutputFormat::from_path(&output_path_buf) {
                OutputFormat::Svg => {
                    let root = SVGBackend::new(&output_path_buf, size).into_drawing_area();
                    draw_histogram(&root, &plan, &chart_config)
                }
                OutputFormat::Png => {
                    let root = BitMapBackend::new(&output_path_buf, size).into_drawing_area();
                    draw_histogram(&root, &plan, &chart_config)
                }
            });

        let drawing_result: Result<(), anyhow::Error> = handle.await.context(
            "[ChartServiceImpl->render_histogram] blocking task join failed (panic/cancelled)",
        )?;

        drawing_result.context("[ChartServiceImpl->render_histogram] drawing/present failed")?;

        info!("Bar chart generated successfully: {:?}", output_path);

        Ok(output_path.to_path_buf())
    }
}

use crate::dashboards::d100_sales_overview::api;
use crate::shared::components::charts::{BarChart, BarDatum, DonutChart, LineChart};
use crate::shared::components::date_range_picker::DateRangePicker;
use crate::shared::components::stat_card::StatCard;
use crate::shared::date_utils::{format_date, format_day_month, to_iso};
use crate::shared::number_format::{format_brl, format_decimal, format_integer};
use contracts::dashboards::d100_sales_overview::{
    CityRanking, DailyRevenuePoint, FilterOptionsResponse, PlatformRevenue, ProductRanking,
    SalesOverviewRequest, SalesOverviewResponse, StoreRevenue, ALL_PLATFORMS,
    ALL_PLATFORMS_LABEL,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Sales overview dashboard
#[component]
pub fn SalesOverviewDashboard() -> impl IntoView {
    // Filter state
    let options = RwSignal::new(None::<FilterOptionsResponse>);
    let date_from = RwSignal::new(String::new());
    let date_to = RwSignal::new(String::new());
    let platform = RwSignal::new(ALL_PLATFORMS.to_string());

    // Data state
    let (data, set_data) = signal(None::<SalesOverviewResponse>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    // Only the latest request may write its answer
    let request_seq = StoredValue::new(0u64);

    // Load filter options on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_filter_options().await {
                Ok(opts) => {
                    log::info!(
                        "D100 filter options loaded: {} records, {}..{}",
                        opts.total_records,
                        opts.date_min,
                        opts.date_max
                    );
                    date_from.set(to_iso(opts.date_min));
                    date_to.set(to_iso(opts.date_max));
                    options.set(Some(opts));
                }
                Err(err) => {
                    log::error!("Failed to load D100 filter options: {}", err);
                    set_error.set(Some(err));
                }
            }
        });
    });

    // Refetch the overview whenever the filter changes
    Effect::new(move |_| {
        let from = date_from.get();
        let to = date_to.get();
        let selected = platform.get();

        if options.with(|o| o.is_none()) {
            return;
        }

        let request = build_request(&from, &to, &selected);
        let seq = request_seq.get_value() + 1;
        request_seq.set_value(seq);
        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            let result = api::get_sales_overview(&request).await;
            if request_seq.get_value() != seq {
                return;
            }
            if let Err(e) = &result {
                log::warn!("D100 overview request failed: {}", e);
            }
            let (response, failure) = settle_overview(result);
            set_data.set(response);
            set_error.set(failure);
            set_loading.set(false);
        });
    });

    let min_date = Signal::derive(move || {
        options
            .get()
            .map(|o| to_iso(o.date_min))
            .unwrap_or_default()
    });
    let max_date = Signal::derive(move || {
        options
            .get()
            .map(|o| to_iso(o.date_max))
            .unwrap_or_default()
    });

    let on_range_change = Callback::new(move |(from, to): (String, String)| {
        date_from.set(from);
        date_to.set(to);
    });

    let export_href = move || {
        api::export_csv_url(&build_request(
            &date_from.get(),
            &date_to.get(),
            &platform.get(),
        ))
    };

    view! {
        <div id="d100_sales_overview--dashboard" class="d100-dashboard">
            <div class="d100-header">
                <h1 class="d100-header__title">"Dashboard de Vendas"</h1>
                <div class="d100-header__subtitle">
                    "Pedidos, receita e clientes por período e plataforma"
                </div>
            </div>

            <MessageBar intent=MessageBarIntent::Warning>
                <MessageBarBody>
                    "Versão de demonstração: todos os dados exibidos são sintéticos."
                </MessageBarBody>
            </MessageBar>

            <div class="d100-filters">
                <DateRangePicker
                    date_from=date_from
                    date_to=date_to
                    min=min_date
                    max=max_date
                    on_change=on_range_change
                    label="Período".to_string()
                />

                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Plataforma"</Label>
                    <Select value=platform>
                        <option value=ALL_PLATFORMS>{ALL_PLATFORMS_LABEL}</option>
                        {move || {
                            options
                                .get()
                                .map(|o| o.platforms)
                                .unwrap_or_default()
                                .into_iter()
                                .map(|p| view! { <option value=p.label()>{p.label()}</option> })
                                .collect_view()
                        }}
                    </Select>
                </Flex>

                <a class="d100-export" href=export_href download="">
                    "Exportar CSV"
                </a>
            </div>

            {move || {
                if loading.get() {
                    view! {
                        <div class="d100-loading">
                            <Spinner />
                            <span>"Carregando dados..."</span>
                        </div>
                    }.into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}

            {move || {
                if let Some(err) = error.get() {
                    view! {
                        <div class="d100-error">
                            <strong>"⚠ Erro: "</strong>
                            {err}
                        </div>
                    }.into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}

            {move || data.get().map(|overview| view! { <OverviewBody overview=overview /> })}

            <AboutPanel />
        </div>
    }
}

/// Everything rendered from one overview response
#[component]
fn OverviewBody(overview: SalesOverviewResponse) -> impl IntoView {
    let period = format!(
        "{} a {}",
        format_date(&to_iso(overview.filter.date_from)),
        format_date(&to_iso(overview.filter.date_to))
    );
    let platform_label = overview
        .filter
        .platform
        .clone()
        .unwrap_or_else(|| ALL_PLATFORMS_LABEL.to_string());

    let (labels, values) = daily_series(&overview.daily_revenue);
    let slices = platform_slices(&overview.platform_revenue);
    let bars = city_bars(&overview.top_cities);

    let cards = overview
        .indicators
        .into_iter()
        .map(|indicator| view! { <StatCard indicator=indicator /> })
        .collect_view();

    let empty_notice = (!overview.has_data).then(|| {
        view! {
            <div class="d100-empty">
                "Nenhum pedido encontrado para o filtro selecionado."
            </div>
        }
    });

    view! {
        <div class="d100-applied">
            <span>"Período: " {period}</span>
            <span>"Plataforma: " {platform_label}</span>
        </div>

        {empty_notice}

        <div class="d100-kpis">{cards}</div>

        <div class="d100-charts">
            <LineChart title="Receita diária".to_string() labels=labels values=values />
            <DonutChart title="Receita por plataforma".to_string() slices=slices />
        </div>

        <div class="d100-charts">
            <ProductsTable products=overview.top_products />
            <BarChart title="Top 10 cidades por receita".to_string() bars=bars />
        </div>

        <StoresTable stores=overview.store_revenue />
    }
}

#[component]
fn ProductsTable(products: Vec<ProductRanking>) -> impl IntoView {
    let rows = products
        .into_iter()
        .enumerate()
        .map(|(i, p)| {
            view! {
                <TableRow>
                    <TableCell>{(i + 1).to_string()}</TableCell>
                    <TableCell>{p.product.label()}</TableCell>
                    <TableCell class="d100-num">{format_brl(p.revenue)}</TableCell>
                    <TableCell class="d100-num">{format_integer(p.quantity as f64)}</TableCell>
                    <TableCell class="d100-num">
                        {format_integer(p.unique_customers as f64)}
                    </TableCell>
                </TableRow>
            }
        })
        .collect_view();

    view! {
        <div class="chart-card">
            <div class="chart-card__title">"Top 10 produtos por receita"</div>
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"#"</TableHeaderCell>
                        <TableHeaderCell>"Produto"</TableHeaderCell>
                        <TableHeaderCell>"Receita"</TableHeaderCell>
                        <TableHeaderCell>"Quantidade"</TableHeaderCell>
                        <TableHeaderCell>"Clientes"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>{rows}</TableBody>
            </Table>
        </div>
    }
}

#[component]
fn StoresTable(stores: Vec<StoreRevenue>) -> impl IntoView {
    let rows = stores
        .into_iter()
        .map(|s| {
            let ticket = s
                .avg_ticket
                .map(format_brl)
                .unwrap_or_else(|| "sem dados".to_string());
            view! {
                <TableRow>
                    <TableCell>{s.store.label()}</TableCell>
                    <TableCell class="d100-num">{format_brl(s.revenue)}</TableCell>
                    <TableCell class="d100-num">{format_integer(s.orders as f64)}</TableCell>
                    <TableCell class="d100-num">{ticket}</TableCell>
                </TableRow>
            }
        })
        .collect_view();

    view! {
        <div class="chart-card">
            <div class="chart-card__title">"Desempenho por loja"</div>
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Loja"</TableHeaderCell>
                        <TableHeaderCell>"Receita"</TableHeaderCell>
                        <TableHeaderCell>"Pedidos"</TableHeaderCell>
                        <TableHeaderCell>"Ticket médio"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>{rows}</TableBody>
            </Table>
        </div>
    }
}

#[component]
fn AboutPanel() -> impl IntoView {
    view! {
        <details class="d100-about">
            <summary>"Sobre este Dashboard"</summary>
            <p>
                "Painel de vendas multicanal com dados sintéticos de um ano. "
                "Filtre por período e plataforma para recalcular indicadores, gráficos e rankings."
            </p>
            <p>"Funcionalidades planejadas:"</p>
            <ul>
                <li>"Importação de planilhas Excel com pedidos reais"</li>
                <li>"Insights automáticos gerados por IA"</li>
                <li>"Automação de marketing via WhatsApp"</li>
                <li>"Monitoramento de preços da concorrência"</li>
            </ul>
        </details>
    }
}

/// Turns the picker state into a request; blanks and the "all" sentinel become `None`
pub fn build_request(date_from: &str, date_to: &str, platform: &str) -> SalesOverviewRequest {
    let non_empty = |s: &str| {
        let s = s.trim();
        (!s.is_empty()).then(|| s.to_string())
    };
    let platform = non_empty(platform).filter(|p| !p.eq_ignore_ascii_case(ALL_PLATFORMS));

    SalesOverviewRequest {
        date_from: non_empty(date_from),
        date_to: non_empty(date_to),
        platform,
    }
}

/// Splits a fetch result into what to render and what to report.
///
/// A failed fetch drops the previous overview so the page never shows numbers
/// for a filter other than the one in the controls.
fn settle_overview(
    result: Result<SalesOverviewResponse, String>,
) -> (Option<SalesOverviewResponse>, Option<String>) {
    match result {
        Ok(response) => (Some(response), None),
        Err(e) => (None, Some(e)),
    }
}

fn daily_series(points: &[DailyRevenuePoint]) -> (Vec<String>, Vec<f64>) {
    points
        .iter()
        .map(|p| (format_day_month(p.date), p.revenue))
        .unzip()
}

fn platform_slices(platforms: &[PlatformRevenue]) -> Vec<(String, f64)> {
    platforms
        .iter()
        .map(|p| {
            let label = format!(
                "{} ({}%)",
                p.platform.label(),
                format_decimal(p.share_percent, 1)
            );
            (label, p.revenue)
        })
        .collect()
}

fn city_bars(cities: &[CityRanking]) -> Vec<BarDatum> {
    cities
        .iter()
        .map(|c| BarDatum {
            label: format!("{} ({})", c.city.label(), c.state.code()),
            group: c.state.code().to_string(),
            value: c.revenue,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::enums::{City, Platform, State};

    #[test]
    fn test_build_request_full_filter() {
        let request = build_request("2024-03-01", "2024-03-31", "Shopee");
        assert_eq!(request.date_from.as_deref(), Some("2024-03-01"));
        assert_eq!(request.date_to.as_deref(), Some("2024-03-31"));
        assert_eq!(request.platform.as_deref(), Some("Shopee"));
    }

    #[test]
    fn test_build_request_all_platforms_and_blanks() {
        let request = build_request("", "  ", "ALL");
        assert_eq!(request, SalesOverviewRequest::default());
    }

    #[test]
    fn test_failed_fetch_clears_overview() {
        let (data, error) = settle_overview(Err("invalid date range".to_string()));
        assert!(data.is_none());
        assert_eq!(error.as_deref(), Some("invalid date range"));
    }

    #[test]
    fn test_daily_series_labels() {
        let points = vec![
            DailyRevenuePoint {
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                revenue: 100.0,
                orders: 2,
            },
            DailyRevenuePoint {
                date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                revenue: 50.0,
                orders: 1,
            },
        ];
        let (labels, values) = daily_series(&points);
        assert_eq!(labels, vec!["01/01".to_string(), "02/01".to_string()]);
        assert_eq!(values, vec![100.0, 50.0]);
    }

    #[test]
    fn test_platform_slices_carry_share() {
        let slices = platform_slices(&[PlatformRevenue {
            platform: Platform::Amazon,
            revenue: 250.0,
            orders: 3,
            share_percent: 25.0,
        }]);
        assert_eq!(slices, vec![("Amazon (25,0%)".to_string(), 250.0)]);
    }

    #[test]
    fn test_city_bars_grouped_by_state() {
        let bars = city_bars(&[CityRanking {
            state: State::Ba,
            city: City::SaoPaulo,
            revenue: 10.0,
            orders: 1,
        }]);
        assert_eq!(bars[0].group, "BA");
        assert_eq!(bars[0].label, "São Paulo (BA)");
    }
}

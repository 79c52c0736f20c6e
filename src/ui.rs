//! HTML shells for the dashboard and investments pages. All numbers are
//! fetched from the JSON API by the embedded scripts.

use crate::pacing::TICK_MS;

pub const BUDGET_STORAGE_KEY: &str = "finmate_budget";

pub fn render_index(default_budget: f64) -> String {
    INDEX_HTML
        .replace("{{STYLE}}", SHARED_STYLE)
        .replace("{{BUDGET_KEY}}", BUDGET_STORAGE_KEY)
        .replace("{{DEFAULT_BUDGET}}", &default_budget.to_string())
        .replace("{{TICK_MS}}", &TICK_MS.to_string())
}

pub fn render_investments() -> String {
    INVESTMENTS_HTML.replace("{{STYLE}}", SHARED_STYLE)
}

const SHARED_STYLE: &str = r#"
    :root {
      --bg: #0d1424;
      --panel: #162038;
      --ink: #eaf0ff;
      --muted: #a9b6d6;
      --good: #27d17f;
      --info: #60a5fa;
      --warn: #fbbf24;
      --bad: #fb7185;
    }

    * { box-sizing: border-box; }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top left, #1b2a4d, var(--bg) 55%);
      color: var(--ink);
      font-family: "Inter", "Segoe UI", sans-serif;
      padding: 28px 18px 48px;
    }

    nav {
      display: flex;
      gap: 18px;
      align-items: baseline;
      margin: 0 auto 22px;
      max-width: 1100px;
    }

    nav h1 { margin: 0; font-size: 1.6rem; }
    nav a { color: var(--muted); text-decoration: none; }
    nav a.active { color: var(--ink); font-weight: 600; }

    main {
      max-width: 1100px;
      margin: 0 auto;
      display: grid;
      gap: 18px;
      grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
    }

    .card {
      background: var(--panel);
      border-radius: 18px;
      padding: 20px;
      box-shadow: 0 18px 40px rgba(0, 0, 0, 0.25);
    }

    .card h2 { margin: 0 0 12px; font-size: 1rem; color: var(--muted); font-weight: 500; }
    .figure { font-size: 1.9rem; font-weight: 600; }
    .muted { color: var(--muted); }
    .small { font-size: 0.85rem; }
    .wide { grid-column: 1 / -1; }
    .chart { position: relative; height: 260px; }

    input, select, button {
      background: #0f1830;
      color: var(--ink);
      border: 1px solid #2a3860;
      border-radius: 10px;
      padding: 8px 10px;
      font: inherit;
    }

    button { cursor: pointer; background: var(--good); color: #062013; border: none; font-weight: 600; }
"#;

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Finmate</title>
  <script src="https://cdn.jsdelivr.net/npm/chart.js"></script>
  <style>
{{STYLE}}
    .row { display: flex; gap: 10px; flex-wrap: wrap; align-items: center; }
    .spendItem, .tipItem {
      display: flex;
      justify-content: space-between;
      align-items: center;
      gap: 12px;
      padding: 10px 0;
      border-bottom: 1px solid rgba(255, 255, 255, 0.06);
    }
    .tipItem { justify-content: flex-start; opacity: 0; transform: translateY(6px); transition: all 240ms ease; }
    .tipItem.show { opacity: 1; transform: none; }
    .tipIcon { font-size: 1.4rem; }
    .bar { height: 6px; background: #0f1830; border-radius: 999px; overflow: hidden; margin: 8px 0 12px; }
    .fill { height: 100%; width: 0; background: var(--info); transition: width 70ms linear; }
    .expenseRow { display: flex; justify-content: space-between; gap: 8px; padding: 6px 0; }
    .expenseRow button { background: transparent; color: var(--bad); padding: 0 6px; }
  </style>
</head>
<body>
  <nav>
    <h1>Finmate</h1>
    <a class="active" href="/">Dashboard</a>
    <a href="/investments">Investments</a>
  </nav>

  <main>
    <section class="card wide row">
      <label>Range
        <select id="rangeSelect">
          <option value="7">Last 7 days</option>
          <option value="30" selected>Last 30 days</option>
          <option value="90">Last 90 days</option>
          <option value="month">This month</option>
        </select>
      </label>
      <label>Monthly income
        <input id="budgetInput" type="number" min="0" step="0.01" />
      </label>
    </section>

    <section class="card">
      <h2>Available balance</h2>
      <div class="figure" id="availableBalance">$0.00</div>
    </section>
    <section class="card">
      <h2>Total expenses</h2>
      <div class="figure" id="totalExpenses">$0.00</div>
    </section>
    <section class="card">
      <h2>Subscriptions</h2>
      <div class="figure" id="subsMonthly">$0.00</div>
    </section>

    <section class="card">
      <h2>By category</h2>
      <div class="chart"><canvas id="categoryChart"></canvas></div>
    </section>
    <section class="card">
      <h2>Income vs expenses</h2>
      <div class="chart"><canvas id="trendChart"></canvas></div>
    </section>

    <section class="card">
      <h2>Smart tips</h2>
      <div class="muted small">Analyzing <span id="tipsPercent">0%</span></div>
      <div class="bar"><div class="fill" id="tipsFill"></div></div>
      <div id="tipsList"></div>
    </section>
    <section class="card">
      <h2>Top spending</h2>
      <div id="spendList"></div>
    </section>

    <section class="card wide">
      <h2>Add expense</h2>
      <form id="expenseForm" class="row">
        <input name="title" placeholder="Title" required />
        <input name="category" placeholder="Category" required />
        <input name="amount" type="number" min="0.01" step="0.01" placeholder="Amount" required />
        <input name="date" type="date" required />
        <button type="submit">Add</button>
        <span class="muted small" id="formStatus"></span>
      </form>
      <div id="expenseList"></div>
    </section>
  </main>

  <script>
    const BUDGET_KEY = "{{BUDGET_KEY}}";
    const DEFAULT_BUDGET = {{DEFAULT_BUDGET}};
    const TICK_MS = {{TICK_MS}};
    const EMPTY_DASHBOARD = {
      summary: { total: 0, subscriptions: 0, available: 0 },
      categories: [],
      series: { labels: ["No data"], expenses: [0], income: [0] },
      top_spending: [],
      tips: [],
      tip_reveal_ms: [],
      progress_ticks: [100],
    };
    let categoryChart = null;
    let trendChart = null;
    let tipsTimer = null;

    const money = (n) => `$${Number(n || 0).toFixed(2)}`;

    function getBudget() {
      const num = Number(localStorage.getItem(BUDGET_KEY));
      return localStorage.getItem(BUDGET_KEY) !== null && Number.isFinite(num) && num >= 0
        ? num
        : DEFAULT_BUDGET;
    }

    async function fetchJson(url, fallback) {
      try {
        const res = await fetch(url);
        if (!res.ok) throw new Error(res.statusText);
        return await res.json();
      } catch {
        return fallback;
      }
    }

    function el(tag, className, text) {
      const node = document.createElement(tag);
      if (className) node.className = className;
      if (text !== undefined) node.textContent = text;
      return node;
    }

    function renderSummary(summary) {
      document.getElementById("availableBalance").textContent = money(summary.available);
      document.getElementById("totalExpenses").textContent = money(summary.total);
      document.getElementById("subsMonthly").textContent = money(summary.subscriptions);
    }

    function renderCharts(data) {
      categoryChart?.destroy();
      trendChart?.destroy();
      if (typeof Chart === "undefined") return;
      const legend = { labels: { color: "#eaf0ff" } };

      categoryChart = new Chart(document.getElementById("categoryChart"), {
        type: "doughnut",
        data: {
          labels: data.categories.map((c) => c.category),
          datasets: [{
            data: data.categories.map((c) => c.amount),
            backgroundColor: ["#27d17f", "#60a5fa", "#fbbf24", "#fb7185", "#a78bfa", "#34d399"],
          }],
        },
        options: { responsive: true, maintainAspectRatio: false, cutout: "65%", plugins: { legend } },
      });

      trendChart = new Chart(document.getElementById("trendChart"), {
        type: "line",
        data: {
          labels: data.series.labels,
          datasets: [
            { label: "Income", data: data.series.income, borderColor: "#60a5fa", tension: 0.35 },
            { label: "Expenses", data: data.series.expenses, borderColor: "#27d17f", tension: 0.35 },
          ],
        },
        options: { responsive: true, maintainAspectRatio: false, plugins: { legend } },
      });
    }

    function renderTopSpending(top) {
      const list = document.getElementById("spendList");
      list.replaceChildren(...top.map((item) => {
        const row = el("div", "spendItem");
        row.append(el("div", "", item.category), el("div", "", money(item.amount)));
        return row;
      }));
    }

    function renderTips(tips, delays, ticks) {
      const list = document.getElementById("tipsList");
      const percent = document.getElementById("tipsPercent");
      const fill = document.getElementById("tipsFill");
      clearInterval(tipsTimer);
      list.replaceChildren();

      const steps = ticks.length ? ticks : [100];
      let tick = 0;
      tipsTimer = setInterval(() => {
        const p = steps[Math.min(tick, steps.length - 1)];
        tick += 1;
        percent.textContent = `${p}%`;
        fill.style.width = `${p}%`;
        if (tick < steps.length) return;
        clearInterval(tipsTimer);

        tips.forEach((tip, i) => {
          const row = el("div", "tipItem");
          const body = el("div");
          body.append(el("div", "", tip.title), el("div", "muted small", tip.text));
          row.append(el("div", "tipIcon", tip.icon), body);
          list.append(row);
          setTimeout(() => row.classList.add("show"), delays[i] ?? 150);
        });
      }, TICK_MS);
    }

    async function renderExpenses() {
      const expenses = await fetchJson("/api/expenses", []);
      const list = document.getElementById("expenseList");
      list.replaceChildren(...expenses.map((e) => {
        const row = el("div", "expenseRow");
        const remove = el("button", "", "✕");
        remove.addEventListener("click", async () => {
          await fetch(`/api/expenses/${e.id}`, { method: "DELETE" }).catch(() => null);
          refresh();
        });
        row.append(el("span", "", `${e.date} · ${e.title} (${e.category})`), el("span", "", money(e.amount)), remove);
        return row;
      }));
    }

    async function refresh() {
      const range = document.getElementById("rangeSelect").value;
      const params = new URLSearchParams({ range, budget: String(getBudget()) });
      const data = await fetchJson(`/api/dashboard?${params}`, EMPTY_DASHBOARD);

      renderSummary(data.summary);
      renderCharts(data);
      renderTopSpending(data.top_spending);
      renderTips(data.tips, data.tip_reveal_ms, data.progress_ticks);
      renderExpenses();
    }

    document.addEventListener("DOMContentLoaded", () => {
      const budgetInput = document.getElementById("budgetInput");
      budgetInput.value = getBudget();
      budgetInput.addEventListener("change", () => {
        localStorage.setItem(BUDGET_KEY, budgetInput.value);
        refresh();
      });
      document.getElementById("rangeSelect").addEventListener("change", refresh);

      document.getElementById("expenseForm").addEventListener("submit", async (event) => {
        event.preventDefault();
        const form = event.target;
        const status = document.getElementById("formStatus");
        const body = Object.fromEntries(new FormData(form));
        try {
          const res = await fetch("/api/expenses", {
            method: "POST",
            headers: { "Content-Type": "application/json" },
            body: JSON.stringify(body),
          });
          const payload = await res.json();
          status.textContent = res.ok ? "Saved" : payload.message;
          if (res.ok) form.reset();
        } catch {
          status.textContent = "Could not reach the server";
        }
        refresh();
      });

      refresh();
    });
  </script>
</body>
</html>
"##;

const INVESTMENTS_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Finmate · Investments</title>
  <style>
{{STYLE}}
    table { width: 100%; border-collapse: collapse; }
    th, td { text-align: left; padding: 8px 4px; border-bottom: 1px solid rgba(255, 255, 255, 0.06); }
    th { color: var(--muted); font-weight: 500; }
    .up { color: var(--good); }
    .down { color: var(--bad); }
  </style>
</head>
<body>
  <nav>
    <h1>Finmate</h1>
    <a href="/">Dashboard</a>
    <a class="active" href="/investments">Investments</a>
  </nav>

  <main>
    <section class="card">
      <h2>Portfolio value</h2>
      <div class="figure" id="portfolioValue">$0.00</div>
    </section>
    <section class="card wide">
      <h2>Holdings</h2>
      <table>
        <thead><tr><th>Symbol</th><th>Name</th><th>Value</th><th>Change</th></tr></thead>
        <tbody id="holdings"></tbody>
      </table>
      <div class="muted small" id="investStatus"></div>
    </section>
  </main>

  <script>
    const money = (n) => `$${Number(n || 0).toFixed(2)}`;

    document.addEventListener("DOMContentLoaded", async () => {
      let data = { holdings: [] };
      try {
        const res = await fetch("/api/investments");
        if (!res.ok) throw new Error(res.statusText);
        data = await res.json();
      } catch {
        document.getElementById("investStatus").textContent = "Investment data is unavailable.";
      }

      const holdings = Array.isArray(data.holdings) ? data.holdings : [];
      const total = holdings.reduce((sum, h) => sum + Number(h.value || 0), 0);
      document.getElementById("portfolioValue").textContent = money(total);

      document.getElementById("holdings").replaceChildren(...holdings.map((h) => {
        const row = document.createElement("tr");
        const change = Number(h.change_pct || 0);
        for (const [text, cls] of [
          [h.symbol, ""],
          [h.name, ""],
          [money(h.value), ""],
          [`${change.toFixed(2)}%`, change >= 0 ? "up" : "down"],
        ]) {
          const cell = document.createElement("td");
          cell.textContent = text ?? "";
          if (cls) cell.className = cls;
          row.append(cell);
        }
        return row;
      }));
    });
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_embeds_budget_settings() {
        let html = render_index(1250.5);
        assert!(html.contains(r#"const BUDGET_KEY = "finmate_budget";"#));
        assert!(html.contains("const DEFAULT_BUDGET = 1250.5;"));
        assert!(html.contains("const TICK_MS = 70;"));
        assert!(html.contains("data.progress_ticks"));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn investments_page_is_fully_rendered() {
        let html = render_investments();
        assert!(html.contains("/api/investments"));
        assert!(!html.contains("{{"));
    }
}

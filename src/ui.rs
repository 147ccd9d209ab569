use crate::models::{ChecklistResponse, DayCell};

pub fn render_index(checklist: &ChecklistResponse) -> String {
    let cells: String = checklist.days.iter().map(render_cell).collect();
    INDEX_HTML
        .replace("{{TARGET_LABEL}}", &checklist.target_label)
        .replace("{{DAYS_REMAINING}}", &checklist.days_remaining.to_string())
        .replace("{{CHECKED}}", &checklist.checked_count.to_string())
        .replace("{{TOTAL}}", &checklist.total_days.to_string())
        .replace("{{PERCENT}}", &checklist.percent.to_string())
        .replace("{{CELLS}}", &cells)
}

fn render_cell(cell: &DayCell) -> String {
    match cell {
        DayCell::Arrival { label, .. } => format!(
            r#"<div class="arrival"><span class="arrival-icon">🏠</span><div><p class="arrival-title">Moving Day!</p><p class="arrival-date">{label}</p></div><span class="arrival-icon">🎉</span></div>"#
        ),
        DayCell::Ordinary {
            date,
            label,
            checked,
            today,
        } => {
            let mut classes = String::from("day");
            if *checked {
                classes.push_str(" checked");
            } else if *today {
                classes.push_str(" today");
            }
            let badge = if *today && !checked {
                r#"<span class="today-badge">Today</span>"#
            } else {
                ""
            };
            let mark = if *checked {
                r#"<span class="day-check">✓</span>"#
            } else {
                r#"<span class="day-check day-dot"></span>"#
            };
            let done = if *checked {
                r#"<span class="day-done">Done</span>"#
            } else {
                ""
            };
            format!(
                r#"<form method="post" action="/toggle/{date}" class="cell"><button type="submit" class="{classes}" data-date="{date}">{badge}<span class="day-date">{label}</span>{mark}{done}</button></form>"#
            )
        }
    }
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Moving Day Countdown</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef3fa;
      --bg-2: #cddcf2;
      --ink: #22303f;
      --accent: #2b6cb0;
      --accent-deep: #1e4e79;
      --done: #2f9e5f;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(30, 78, 121, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 55%),
        linear-gradient(150deg, var(--bg-1), #e3ecf8 60%, #f4f8fd 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 56px;
    }

    .app {
      width: min(900px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    header {
      display: grid;
      gap: 20px;
    }

    .hero-top {
      display: flex;
      justify-content: space-between;
      align-items: center;
      gap: 16px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(1.7rem, 4vw, 2.4rem);
      margin: 0;
    }

    .reset {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 9px 18px;
      background: rgba(43, 108, 176, 0.12);
      color: var(--accent-deep);
      font: inherit;
      font-weight: 600;
      cursor: pointer;
      transition: background 150ms ease;
      white-space: nowrap;
    }

    .reset:hover {
      background: rgba(43, 108, 176, 0.22);
    }

    .hero-panel {
      display: flex;
      flex-wrap: wrap;
      justify-content: space-between;
      align-items: center;
      gap: 18px;
      background: linear-gradient(135deg, var(--accent), var(--accent-deep));
      color: white;
      border-radius: 18px;
      padding: 22px 26px;
    }

    .label {
      display: block;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      font-size: 0.78rem;
      opacity: 0.85;
    }

    .value {
      display: block;
      font-size: 1.35rem;
      font-weight: 600;
      margin-top: 4px;
    }

    .remaining {
      text-align: center;
    }

    .big {
      display: block;
      font-size: 3rem;
      font-weight: 700;
      line-height: 1;
    }

    .progress-meta {
      display: flex;
      justify-content: space-between;
      font-size: 0.9rem;
      color: #55657a;
      margin-bottom: 6px;
    }

    .progress-track {
      background: rgba(30, 78, 121, 0.12);
      border-radius: 999px;
      height: 12px;
      overflow: hidden;
    }

    .progress-fill {
      background: var(--done);
      height: 100%;
      border-radius: 999px;
      transition: width 400ms ease;
    }

    h2 {
      margin: 0 0 14px;
      font-size: 1.15rem;
      color: #55657a;
      font-weight: 600;
    }

    .grid {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(104px, 1fr));
      gap: 12px;
    }

    .cell {
      display: contents;
    }

    .day {
      position: relative;
      min-height: 96px;
      width: 100%;
      border: 2px solid rgba(34, 48, 63, 0.12);
      border-radius: 14px;
      background: white;
      color: var(--ink);
      font: inherit;
      display: flex;
      flex-direction: column;
      align-items: center;
      justify-content: center;
      gap: 6px;
      cursor: pointer;
      transition: border-color 150ms ease, box-shadow 150ms ease, transform 150ms ease;
    }

    .day:hover {
      border-color: var(--accent);
      box-shadow: 0 10px 22px rgba(30, 78, 121, 0.12);
    }

    .day:active {
      transform: scale(0.97);
    }

    .day.checked {
      background: #effaf3;
      border-color: var(--done);
      color: #20714a;
    }

    .day.today {
      outline: 3px solid rgba(43, 108, 176, 0.45);
      outline-offset: 2px;
    }

    .today-badge {
      position: absolute;
      top: -10px;
      right: -6px;
      background: var(--accent);
      color: white;
      font-size: 0.65rem;
      font-weight: 700;
      padding: 2px 8px;
      border-radius: 999px;
    }

    .day-date {
      font-size: 0.95rem;
      font-weight: 600;
    }

    .day-check {
      width: 30px;
      height: 30px;
      border-radius: 50%;
      background: rgba(34, 48, 63, 0.08);
      color: white;
      display: grid;
      place-items: center;
      font-size: 0.95rem;
    }

    .day.checked .day-check {
      background: var(--done);
    }

    .day-dot::after {
      content: '';
      width: 8px;
      height: 8px;
      border-radius: 50%;
      background: rgba(34, 48, 63, 0.25);
    }

    .day-done {
      font-size: 0.62rem;
      font-weight: 700;
      letter-spacing: 0.14em;
      text-transform: uppercase;
      color: var(--done);
    }

    .arrival {
      grid-column: 1 / -1;
      margin-top: 8px;
      background: linear-gradient(120deg, var(--accent), var(--accent-deep));
      color: white;
      border-radius: 18px;
      padding: 26px;
      display: flex;
      align-items: center;
      justify-content: center;
      gap: 18px;
      box-shadow: 0 16px 34px rgba(30, 78, 121, 0.25);
    }

    .arrival-icon {
      font-size: 2.2rem;
    }

    .arrival-title {
      margin: 0;
      font-size: 1.5rem;
      font-weight: 700;
      text-align: center;
    }

    .arrival-date {
      margin: 4px 0 0;
      opacity: 0.9;
      text-align: center;
    }

    .status {
      font-size: 0.95rem;
      color: #55657a;
      min-height: 1.2em;
    }

    .status[data-type='error'] {
      color: #c63b2b;
    }

    .status[data-type='ok'] {
      color: #2d7a4b;
    }

    @media (max-width: 600px) {
      .app {
        padding: 26px 20px;
      }
      .big {
        font-size: 2.4rem;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <div class="hero-top">
        <h1>🚚 Moving Day Countdown</h1>
        <button class="reset" id="reset-btn" type="button">Reset</button>
      </div>

      <div class="hero-panel">
        <div>
          <span class="label">Moving day</span>
          <span id="target" class="value">{{TARGET_LABEL}}</span>
        </div>
        <div class="remaining">
          <span id="remaining" class="big">{{DAYS_REMAINING}}</span>
          <span class="label">days to go</span>
        </div>
      </div>

      <div>
        <div class="progress-meta">
          <span>Journey so far</span>
          <span><span id="checked-count">{{CHECKED}}</span> of <span id="total-count">{{TOTAL}}</span> days · <span id="percent">{{PERCENT}}</span>%</span>
        </div>
        <div class="progress-track">
          <div class="progress-fill" id="progress-fill" style="width: {{PERCENT}}%"></div>
        </div>
      </div>
    </header>

    <section>
      <h2>📅 Daily checklist</h2>
      <div class="grid" id="grid">{{CELLS}}</div>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const targetEl = document.getElementById('target');
    const remainingEl = document.getElementById('remaining');
    const checkedEl = document.getElementById('checked-count');
    const totalEl = document.getElementById('total-count');
    const percentEl = document.getElementById('percent');
    const fillEl = document.getElementById('progress-fill');
    const gridEl = document.getElementById('grid');
    const statusEl = document.getElementById('status');
    const resetBtn = document.getElementById('reset-btn');

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const cellHtml = (cell) => {
      if (cell.kind === 'arrival') {
        return `<div class="arrival"><span class="arrival-icon">🏠</span><div><p class="arrival-title">Moving Day!</p><p class="arrival-date">${cell.label}</p></div><span class="arrival-icon">🎉</span></div>`;
      }
      const classes = ['day'];
      if (cell.checked) {
        classes.push('checked');
      } else if (cell.today) {
        classes.push('today');
      }
      const badge = cell.today && !cell.checked ? '<span class="today-badge">Today</span>' : '';
      const mark = cell.checked
        ? '<span class="day-check">✓</span>'
        : '<span class="day-check day-dot"></span>';
      const done = cell.checked ? '<span class="day-done">Done</span>' : '';
      return `<form method="post" action="/toggle/${cell.date}" class="cell"><button type="submit" class="${classes.join(' ')}" data-date="${cell.date}">${badge}<span class="day-date">${cell.label}</span>${mark}${done}</button></form>`;
    };

    const updateUI = (data) => {
      targetEl.textContent = data.target_label;
      remainingEl.textContent = data.days_remaining;
      checkedEl.textContent = data.checked_count;
      totalEl.textContent = data.total_days;
      percentEl.textContent = data.percent;
      fillEl.style.width = `${data.percent}%`;
      gridEl.innerHTML = data.days.map(cellHtml).join('');
    };

    const refresh = async () => {
      const res = await fetch('/api/checklist');
      if (!res.ok) {
        throw new Error('Unable to load the checklist');
      }
      updateUI(await res.json());
    };

    const sendToggle = async (date) => {
      setStatus('Saving...', 'info');
      const res = await fetch('/api/toggle', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ date })
      });

      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }

      updateUI(await res.json());
      setStatus('Saved', 'ok');
      setTimeout(() => setStatus('', ''), 1200);
    };

    const sendReset = async () => {
      setStatus('Saving...', 'info');
      const res = await fetch('/api/reset', { method: 'POST' });
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      updateUI(await res.json());
      setStatus('Checklist cleared', 'ok');
      setTimeout(() => setStatus('', ''), 1200);
    };

    gridEl.addEventListener('click', (event) => {
      const button = event.target.closest('button.day');
      if (!button) {
        return;
      }
      event.preventDefault();
      sendToggle(button.dataset.date).catch((err) => setStatus(err.message, 'error'));
    });

    resetBtn.addEventListener('click', () => {
      if (!confirm('Uncheck every day?')) {
        return;
      }
      sendReset().catch((err) => setStatus(err.message, 'error'));
    });

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"##;

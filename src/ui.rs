//! Server-rendered page shells. All data comes from the JSON API; the home
//! page is the only template with a server-side placeholder (stored theme).

pub fn render_home(theme: &str) -> String {
    HOME_HTML.replace("{{THEME}}", theme)
}

const HOME_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>MoneyMate</title>
  <style>
    :root { --bg: #10141a; --card: #1a212b; --ink: #e8edf2; --muted: #8b97a5; --accent: #4caf50; --danger: #f44336; }
    body[data-theme="light"] { --bg: #f4f6f8; --card: #ffffff; --ink: #22292f; --muted: #5c6770; }
    * { box-sizing: border-box; }
    body { margin: 0; background: var(--bg); color: var(--ink); font-family: "Segoe UI", "Trebuchet MS", sans-serif; padding: 24px; }
    nav { display: flex; gap: 16px; align-items: center; margin-bottom: 24px; }
    nav a { color: var(--muted); text-decoration: none; font-weight: 600; }
    nav a.active { color: var(--accent); }
    nav button { margin-left: auto; background: var(--card); color: var(--ink); border: 1px solid var(--muted); border-radius: 8px; padding: 6px 12px; cursor: pointer; }
    .grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 16px; margin-bottom: 24px; }
    .card { background: var(--card); border-radius: 12px; padding: 18px; }
    .card .label { color: var(--muted); font-size: 0.85rem; text-transform: uppercase; letter-spacing: 0.08em; }
    .card .value { font-size: 1.6rem; font-weight: 600; margin-top: 6px; }
    .controls { display: flex; gap: 12px; margin-bottom: 12px; }
    select { background: var(--card); color: var(--ink); border: 1px solid var(--muted); border-radius: 8px; padding: 6px 10px; }
    svg { width: 100%; height: 260px; display: block; }
    .chart-line { fill: none; stroke: var(--accent); stroke-width: 2.5; }
    .chart-label { fill: var(--muted); font-size: 11px; }
    .chart-grid { stroke: rgba(139, 151, 165, 0.25); }
    .chat { display: grid; gap: 10px; margin-top: 24px; }
    .messages { background: var(--card); border-radius: 12px; padding: 14px; min-height: 160px; max-height: 320px; overflow-y: auto; display: grid; gap: 8px; align-content: start; }
    .message { padding: 8px 12px; border-radius: 10px; max-width: 80%; }
    .message.user { background: var(--accent); color: white; justify-self: end; }
    .message.bot { background: var(--bg); justify-self: start; }
    .chat-row { display: flex; gap: 10px; }
    .chat-row input { flex: 1; background: var(--card); color: var(--ink); border: 1px solid var(--muted); border-radius: 8px; padding: 10px 12px; }
    .chat-row button { background: var(--accent); color: white; border: none; border-radius: 8px; padding: 10px 18px; cursor: pointer; }
    .status { color: var(--danger); min-height: 1.2em; font-size: 0.9rem; }
  </style>
</head>
<body data-theme="{{THEME}}">
  <nav>
    <a class="active" href="/">Dashboard</a>
    <a href="/budget">Budget</a>
    <a href="/profile">Profile</a>
    <a href="/login">Login</a>
    <button id="theme-toggle" type="button">Toggle theme</button>
  </nav>

  <section class="grid">
    <div class="card"><span class="label">Balance</span><div class="value" id="balance">0</div></div>
    <div class="card"><span class="label">Total income</span><div class="value" id="total-income">0</div></div>
    <div class="card"><span class="label">Total expenses</span><div class="value" id="total-expenses">0</div></div>
  </section>

  <section class="card">
    <div class="controls">
      <select id="range">
        <option value="day">Last 24 hours</option>
        <option value="week">Last 7 days</option>
        <option value="month">Last 30 days</option>
        <option value="year">This year</option>
      </select>
      <select id="metric">
        <option value="balance">Balance</option>
        <option value="income">Income</option>
        <option value="expenses">Expenses</option>
      </select>
    </div>
    <svg id="chart" viewBox="0 0 600 260" role="img" aria-label="Finance chart"></svg>
  </section>

  <section class="chat">
    <div class="messages" id="messages"></div>
    <div class="chat-row">
      <input id="chat-input" placeholder="Ask your financial advisor..." />
      <button id="chat-send" type="button">Send</button>
    </div>
    <div class="status" id="status"></div>
  </section>

  <script>
    const fmt = (value) => new Intl.NumberFormat(undefined, { style: 'currency', currency: 'INR' }).format(value);
    const statusEl = document.getElementById('status');
    const chartEl = document.getElementById('chart');
    const messagesEl = document.getElementById('messages');
    const rangeEl = document.getElementById('range');
    const metricEl = document.getElementById('metric');

    const renderChart = (labels, values) => {
      const width = 600, height = 260, padX = 44, padY = 30;
      let min = Math.min(0, ...values);
      let max = Math.max(0, ...values);
      if (min === max) { min -= 1; max += 1; }
      const stepX = values.length > 1 ? (width - padX * 2) / (values.length - 1) : 0;
      const y = (v) => height - padY - ((v - min) / (max - min)) * (height - padY * 2);
      const x = (i) => padX + i * stepX;
      const path = values.map((v, i) => (i === 0 ? 'M' : 'L') + ' ' + x(i).toFixed(1) + ' ' + y(v).toFixed(1)).join(' ');
      const every = labels.length > 12 ? 4 : 1;
      const ticks = labels.map((label, i) => i % every === 0
        ? '<text class="chart-label" x="' + x(i) + '" y="' + (height - 8) + '" text-anchor="middle">' + label + '</text>'
        : '').join('');
      const zero = '<line class="chart-grid" x1="' + padX + '" y1="' + y(0) + '" x2="' + (width - padX) + '" y2="' + y(0) + '" />';
      chartEl.innerHTML = zero + '<path class="chart-line" d="' + path + '" />' + ticks;
    };

    const loadGraph = async () => {
      const res = await fetch('/api/graph?range=' + rangeEl.value + '&metric=' + metricEl.value);
      if (!res.ok) throw new Error('Unable to load chart data');
      const series = await res.json();
      renderChart(series.labels, series.values);
    };

    const loadTotals = async () => {
      const res = await fetch('/api/ledger');
      if (!res.ok) throw new Error('Unable to load ledger');
      const ledger = await res.json();
      document.getElementById('balance').textContent = fmt(ledger.balance);
      document.getElementById('total-income').textContent = fmt(ledger.total_income);
      document.getElementById('total-expenses').textContent = fmt(ledger.total_expenses);
    };

    const appendMessage = (sender, text) => {
      const div = document.createElement('div');
      div.className = 'message ' + sender;
      div.textContent = text;
      messagesEl.appendChild(div);
      messagesEl.scrollTop = messagesEl.scrollHeight;
      return div;
    };

    const loadHistory = async () => {
      const res = await fetch('/api/chat/history');
      if (!res.ok) return;
      (await res.json()).forEach((m) => appendMessage(m.sender, m.text));
    };

    const sendChat = async () => {
      const input = document.getElementById('chat-input');
      const message = input.value.trim();
      if (!message) return;
      input.value = '';
      appendMessage('user', message);
      const typing = appendMessage('bot', 'Typing...');
      try {
        const res = await fetch('/api/chat', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify({ message })
        });
        const data = await res.json();
        typing.remove();
        if (!res.ok) throw new Error(data.message || 'Chat failed');
        appendMessage('bot', data.choices[0].message.content);
      } catch (err) {
        typing.remove();
        statusEl.textContent = err.message;
      }
    };

    document.getElementById('chat-send').addEventListener('click', sendChat);
    document.getElementById('chat-input').addEventListener('keypress', (e) => {
      if (e.key === 'Enter') sendChat();
    });
    rangeEl.addEventListener('change', () => loadGraph().catch((err) => statusEl.textContent = err.message));
    metricEl.addEventListener('change', () => loadGraph().catch((err) => statusEl.textContent = err.message));

    document.getElementById('theme-toggle').addEventListener('click', async () => {
      const next = document.body.dataset.theme === 'dark' ? 'light' : 'dark';
      document.body.dataset.theme = next;
      await fetch('/api/theme', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ theme: next })
      });
    });

    Promise.all([loadTotals(), loadGraph(), loadHistory()])
      .catch((err) => statusEl.textContent = err.message);
  </script>
</body>
</html>
"#;

pub const BUDGET_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>MoneyMate - Budget</title>
  <style>
    :root { --bg: #10141a; --card: #1a212b; --ink: #e8edf2; --muted: #8b97a5; --accent: #4caf50; --danger: #f44336; }
    * { box-sizing: border-box; }
    body { margin: 0; background: var(--bg); color: var(--ink); font-family: "Segoe UI", "Trebuchet MS", sans-serif; padding: 24px; }
    nav { display: flex; gap: 16px; margin-bottom: 24px; }
    nav a { color: var(--muted); text-decoration: none; font-weight: 600; }
    nav a.active { color: var(--accent); }
    .grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); gap: 16px; }
    .card { background: var(--card); border-radius: 12px; padding: 18px; display: grid; gap: 10px; align-content: start; }
    input { background: var(--bg); color: var(--ink); border: 1px solid var(--muted); border-radius: 8px; padding: 10px 12px; }
    button { background: var(--accent); color: white; border: none; border-radius: 8px; padding: 10px 16px; cursor: pointer; }
    ul { list-style: none; margin: 0; padding: 0; display: grid; gap: 6px; }
    li { display: flex; justify-content: space-between; color: var(--muted); }
    .totals { display: flex; gap: 24px; margin: 18px 0; }
    .status { color: var(--danger); min-height: 1.2em; }
  </style>
</head>
<body>
  <nav>
    <a href="/">Dashboard</a>
    <a class="active" href="/budget">Budget</a>
    <a href="/profile">Profile</a>
  </nav>

  <div class="totals">
    <div>Income: <strong id="total-income">0</strong></div>
    <div>Expenses: <strong id="total-expenses">0</strong></div>
    <div>Balance: <strong id="balance">0</strong></div>
  </div>

  <div class="grid">
    <section class="card">
      <h2>Add income</h2>
      <input id="income-description" placeholder="Description" />
      <input id="income-amount" type="number" min="0" step="0.01" placeholder="Amount" />
      <button id="income-add" type="button">Add income</button>
      <ul id="income-list"></ul>
    </section>
    <section class="card">
      <h2>Add expense</h2>
      <input id="expense-description" placeholder="Description" />
      <input id="expense-amount" type="number" min="0" step="0.01" placeholder="Amount" />
      <button id="expense-add" type="button">Add expense</button>
      <ul id="expense-list"></ul>
    </section>
  </div>
  <div class="status" id="status"></div>

  <script>
    const fmt = (value) => new Intl.NumberFormat(undefined, { style: 'currency', currency: 'INR' }).format(value);
    const statusEl = document.getElementById('status');

    const render = (ledger) => {
      document.getElementById('total-income').textContent = fmt(ledger.total_income);
      document.getElementById('total-expenses').textContent = fmt(ledger.total_expenses);
      document.getElementById('balance').textContent = fmt(ledger.balance);
      for (const [id, entries] of [['income-list', ledger.incomes], ['expense-list', ledger.expenses]]) {
        const list = document.getElementById(id);
        list.innerHTML = '';
        entries.slice().reverse().forEach((entry) => {
          const li = document.createElement('li');
          const name = document.createElement('span');
          name.textContent = entry.description;
          const amount = document.createElement('span');
          amount.textContent = fmt(entry.amount);
          li.append(name, amount);
          list.appendChild(li);
        });
      }
    };

    const load = async () => {
      const res = await fetch('/api/ledger');
      if (!res.ok) throw new Error('Unable to load ledger');
      render(await res.json());
    };

    const add = async (kind) => {
      statusEl.textContent = '';
      const description = document.getElementById(kind + '-description').value;
      const amount = parseFloat(document.getElementById(kind + '-amount').value);
      const res = await fetch('/api/ledger/' + kind, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ description, amount })
      });
      const data = await res.json();
      if (!res.ok) throw new Error(data.message || 'Request failed');
      document.getElementById(kind + '-description').value = '';
      document.getElementById(kind + '-amount').value = '';
      render(data);
    };

    document.getElementById('income-add').addEventListener('click', () => add('income').catch((err) => statusEl.textContent = err.message));
    document.getElementById('expense-add').addEventListener('click', () => add('expense').catch((err) => statusEl.textContent = err.message));
    load().catch((err) => statusEl.textContent = err.message);
  </script>
</body>
</html>
"#;

pub const LOGIN_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>MoneyMate - Login</title>
  <style>
    :root { --bg: #10141a; --card: #1a212b; --ink: #e8edf2; --muted: #8b97a5; --accent: #4caf50; --danger: #f44336; }
    body { margin: 0; min-height: 100vh; background: var(--bg); color: var(--ink); font-family: "Segoe UI", "Trebuchet MS", sans-serif; display: grid; place-items: center; }
    .card { background: var(--card); border-radius: 12px; padding: 28px; width: min(380px, 90vw); display: grid; gap: 12px; }
    input { background: var(--bg); color: var(--ink); border: 1px solid var(--muted); border-radius: 8px; padding: 10px 12px; }
    button { background: var(--accent); color: white; border: none; border-radius: 8px; padding: 10px 16px; cursor: pointer; }
    button.secondary { background: transparent; border: 1px solid var(--muted); color: var(--ink); }
    .status { min-height: 1.2em; font-size: 0.9rem; color: var(--danger); }
  </style>
</head>
<body>
  <div class="card">
    <h1>MoneyMate</h1>
    <input id="email" type="email" placeholder="Email" />
    <input id="password" type="password" placeholder="Password" />
    <button id="login" type="button">Log in</button>
    <button id="register" class="secondary" type="button">Create account</button>
    <div class="status" id="status"></div>
  </div>

  <script>
    const statusEl = document.getElementById('status');

    const submit = async (path) => {
      statusEl.textContent = '';
      const email = document.getElementById('email').value;
      const password = document.getElementById('password').value;
      const res = await fetch(path, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ email, password })
      });
      const data = await res.json();
      if (!res.ok) throw new Error(data.message || 'Request failed');
      return data;
    };

    document.getElementById('login').addEventListener('click', () => {
      submit('/api/login')
        .then((data) => {
          localStorage.setItem('token', data.token);
          window.location.href = '/';
        })
        .catch((err) => statusEl.textContent = err.message);
    });

    document.getElementById('register').addEventListener('click', () => {
      submit('/api/register')
        .then((data) => statusEl.textContent = data.message)
        .catch((err) => statusEl.textContent = err.message);
    });
  </script>
</body>
</html>
"#;

pub const PROFILE_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>MoneyMate - Profile</title>
  <style>
    :root { --bg: #10141a; --card: #1a212b; --ink: #e8edf2; --muted: #8b97a5; --accent: #4caf50; --danger: #f44336; }
    body { margin: 0; min-height: 100vh; background: var(--bg); color: var(--ink); font-family: "Segoe UI", "Trebuchet MS", sans-serif; display: grid; place-items: center; }
    .card { background: var(--card); border-radius: 12px; padding: 28px; width: min(420px, 90vw); display: grid; gap: 12px; }
    input { background: var(--bg); color: var(--ink); border: 1px solid var(--muted); border-radius: 8px; padding: 10px 12px; }
    button { background: var(--accent); color: white; border: none; border-radius: 8px; padding: 10px 16px; cursor: pointer; }
    .status { min-height: 1.2em; font-size: 0.9rem; color: var(--muted); }
    a { color: var(--muted); }
  </style>
</head>
<body>
  <div class="card">
    <h1>Profile</h1>
    <input id="fullName" placeholder="Full name" />
    <input id="phone" placeholder="Phone" />
    <input id="location" placeholder="Location" />
    <button id="save" type="button">Save</button>
    <div class="status" id="status"></div>
    <a href="/">Back to dashboard</a>
  </div>

  <script>
    const statusEl = document.getElementById('status');

    document.getElementById('save').addEventListener('click', async () => {
      statusEl.textContent = '';
      const token = localStorage.getItem('token');
      if (!token) {
        window.location.href = '/login';
        return;
      }
      const body = {
        fullName: document.getElementById('fullName').value,
        phone: document.getElementById('phone').value,
        location: document.getElementById('location').value
      };
      try {
        const res = await fetch('/api/profile/update', {
          method: 'POST',
          headers: { 'content-type': 'application/json', authorization: 'Bearer ' + token },
          body: JSON.stringify(body)
        });
        const data = await res.json();
        if (res.status === 401) {
          window.location.href = '/login';
          return;
        }
        if (!res.ok) throw new Error(data.message || 'Request failed');
        statusEl.textContent = data.message;
      } catch (err) {
        statusEl.textContent = err.message;
      }
    });
  </script>
</body>
</html>
"#;

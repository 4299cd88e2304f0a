pub const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Mood Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --happy: #2ecc71;
      --sad: #3498db;
      --angry: #e74c3c;
      --okay: #f1c40f;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(860px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    h2 {
      margin: 0;
      font-size: 1.4rem;
    }

    .subtitle {
      margin: 0;
      color: #5f5c57;
      font-size: 1rem;
    }

    .tabs {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(47, 72, 88, 0.08);
      border-radius: 999px;
      width: fit-content;
    }

    .tab {
      background: transparent;
      border: none;
      border-radius: 999px;
      padding: 8px 14px;
      font-size: 0.9rem;
      font-weight: 600;
      color: #6b645d;
      cursor: pointer;
    }

    .tab.active {
      background: white;
      color: var(--accent-2);
      box-shadow: 0 8px 16px rgba(47, 72, 88, 0.12);
    }

    .card {
      background: white;
      border-radius: 20px;
      padding: 20px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 14px;
    }

    input, textarea {
      font: inherit;
      border: 1px solid rgba(47, 72, 88, 0.2);
      border-radius: 12px;
      padding: 10px 12px;
      width: 100%;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 20px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
    }

    button:active {
      transform: scale(0.98);
    }

    button:disabled {
      opacity: 0.5;
      cursor: not-allowed;
    }

    .btn-primary {
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(255, 107, 74, 0.3);
    }

    .btn-secondary {
      background: var(--accent-2);
      color: white;
    }

    .btn-link {
      background: transparent;
      color: var(--accent-2);
      text-decoration: underline;
      padding: 4px;
    }

    .mood-row {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(120px, 1fr));
      gap: 10px;
    }

    .mood-option {
      background: white;
      border: 2px solid rgba(47, 72, 88, 0.15);
      border-radius: 16px;
      padding: 14px;
      font-size: 1rem;
      display: grid;
      gap: 4px;
      justify-items: center;
    }

    .mood-option .face {
      font-size: 1.8rem;
    }

    .mood-option.selected {
      border-color: var(--accent);
      box-shadow: 0 8px 16px rgba(255, 107, 74, 0.2);
    }

    .entry {
      display: flex;
      justify-content: space-between;
      align-items: center;
      gap: 12px;
      padding: 10px 0;
      border-bottom: 1px solid rgba(47, 72, 88, 0.08);
    }

    .entry:last-child {
      border-bottom: none;
    }

    .entry .meta {
      display: grid;
      gap: 2px;
    }

    .entry .when {
      font-size: 0.85rem;
      color: #8b857d;
    }

    .entry .note {
      font-size: 0.9rem;
      color: #5f5c57;
    }

    .pager {
      display: flex;
      justify-content: center;
      align-items: center;
      gap: 16px;
    }

    #chart {
      width: 100%;
      height: 260px;
      display: block;
    }

    #chart text {
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
    }

    .chart-grid {
      stroke: rgba(47, 72, 88, 0.12);
    }

    .chart-label {
      fill: #7a746d;
      font-size: 12px;
    }

    .chart-metrics {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .status {
      font-size: 0.95rem;
      color: #6b645d;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    .hint {
      margin: 0;
      color: #6f6a65;
      font-size: 0.9rem;
    }

    .hidden {
      display: none;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Mood Tracker</h1>
      <p class="subtitle">One mood a day, a week at a glance.</p>
    </header>

    <section id="auth-view">
      <div class="card">
        <h2 id="auth-title">Log in</h2>
        <input id="auth-email" type="email" placeholder="Email" autocomplete="email" />
        <input id="auth-password" type="password" placeholder="Password" autocomplete="current-password" />
        <button class="btn-primary" id="auth-submit" type="button">Log in</button>
        <button class="btn-link" id="auth-toggle" type="button">Need an account? Register</button>
      </div>
    </section>

    <section id="app-view" class="hidden">
      <div class="tabs" role="tablist">
        <button class="tab active" type="button" data-tab="dashboard" role="tab">Dashboard</button>
        <button class="tab" type="button" data-tab="history" role="tab">History</button>
        <button class="tab" type="button" data-tab="analytics" role="tab">Analytics</button>
        <button class="tab" type="button" id="logout" role="tab">Log out</button>
      </div>

      <div id="dashboard-pane">
        <div class="card">
          <h2 id="form-title">How are you feeling today?</h2>
          <div class="mood-row" id="mood-row"></div>
          <label for="note">Note (optional, max 150 characters)</label>
          <textarea id="note" maxlength="150" rows="3" placeholder="How was your day?"></textarea>
          <small id="note-count">0/150 characters</small>
          <button class="btn-primary" id="save-mood" type="button">Log Mood</button>
        </div>
        <div class="card" id="recent-card">
          <h2>Recent Entries</h2>
          <div id="recent-entries"></div>
        </div>
      </div>

      <div id="history-pane" class="hidden">
        <div class="card">
          <h2 id="history-title">Mood History</h2>
          <div id="history-entries"></div>
          <div class="pager">
            <button class="btn-secondary" id="prev-page" type="button">Previous</button>
            <span id="page-label"></span>
            <button class="btn-secondary" id="next-page" type="button">Next</button>
          </div>
        </div>
      </div>

      <div id="analytics-pane" class="hidden">
        <div class="card">
          <h2>Mood Distribution - Last 7 Days</h2>
          <svg id="chart" viewBox="0 0 600 260" aria-label="Mood chart" role="img"></svg>
        </div>
        <div class="chart-metrics">
          <div class="stat">
            <span class="label">Total days tracked</span>
            <span class="value" id="total-days">0</span>
          </div>
          <div class="stat">
            <span class="label">Most common mood</span>
            <span class="value" id="common-mood">N/A</span>
          </div>
        </div>
      </div>
    </section>

    <div class="status" id="status"></div>
    <p class="hint">Days are counted in the server's timezone, so the form switches to editing once today is logged.</p>
  </main>

  <script>
    const MOODS = [
      { name: 'Happy', face: '\u{1F60A}', color: '#2ecc71' },
      { name: 'Sad', face: '\u{1F622}', color: '#3498db' },
      { name: 'Angry', face: '\u{1F620}', color: '#e74c3c' },
      { name: 'Okay', face: '\u{1F610}', color: '#f1c40f' }
    ];

    const statusEl = document.getElementById('status');
    const authView = document.getElementById('auth-view');
    const appView = document.getElementById('app-view');
    const noteEl = document.getElementById('note');
    const noteCountEl = document.getElementById('note-count');
    const saveBtn = document.getElementById('save-mood');
    const moodRow = document.getElementById('mood-row');
    const tabs = Array.from(document.querySelectorAll('.tab[data-tab]'));

    let token = localStorage.getItem('token');
    let registering = false;
    let selectedMood = '';
    let todayEntry = null;
    let submitting = false;
    let historyPage = 1;

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const messageFrom = (body) => {
      if (body && Array.isArray(body.errors)) {
        return body.errors.map((err) => err.message).join(' ');
      }
      if (body && body.error) {
        return body.error;
      }
      return 'Request failed';
    };

    const api = async (path, options = {}) => {
      const headers = { 'content-type': 'application/json' };
      if (token) {
        headers.authorization = 'Bearer ' + token;
      }
      const res = await fetch(path, { ...options, headers });
      if (res.status === 401) {
        logout();
        throw new Error('Session expired, please log in again');
      }
      const body = await res.json().catch(() => null);
      if (!res.ok) {
        throw new Error(messageFrom(body));
      }
      return body;
    };

    const logout = () => {
      token = null;
      localStorage.removeItem('token');
      appView.classList.add('hidden');
      authView.classList.remove('hidden');
    };

    const showApp = () => {
      authView.classList.add('hidden');
      appView.classList.remove('hidden');
      loadDashboard().catch((err) => setStatus(err.message, 'error'));
    };

    const submitAuth = async () => {
      const email = document.getElementById('auth-email').value;
      const password = document.getElementById('auth-password').value;
      const path = registering ? '/api/auth/register' : '/api/auth/login';
      const body = await api(path, { method: 'POST', body: JSON.stringify({ email, password }) });
      token = body.token;
      localStorage.setItem('token', token);
      setStatus('', '');
      showApp();
    };

    const moodFace = (name) => {
      const mood = MOODS.find((m) => m.name === name);
      return mood ? mood.face : '';
    };

    const renderMoodRow = () => {
      moodRow.innerHTML = '';
      MOODS.forEach((mood) => {
        const button = document.createElement('button');
        button.type = 'button';
        button.className = 'mood-option' + (selectedMood === mood.name ? ' selected' : '');
        button.innerHTML = '<span class="face">' + mood.face + '</span><span>' + mood.name + '</span>';
        button.addEventListener('click', () => {
          selectedMood = mood.name;
          renderMoodRow();
        });
        moodRow.appendChild(button);
      });
    };

    const renderEntry = (entry, onDelete) => {
      const row = document.createElement('div');
      row.className = 'entry';
      const meta = document.createElement('div');
      meta.className = 'meta';
      const title = document.createElement('span');
      title.textContent = moodFace(entry.mood) + ' ' + entry.mood;
      const when = document.createElement('span');
      when.className = 'when';
      when.textContent = entry.entry_date;
      meta.appendChild(title);
      meta.appendChild(when);
      if (entry.note) {
        const note = document.createElement('span');
        note.className = 'note';
        note.textContent = entry.note;
        meta.appendChild(note);
      }
      const del = document.createElement('button');
      del.className = 'btn-secondary';
      del.type = 'button';
      del.textContent = 'Delete';
      del.addEventListener('click', onDelete);
      row.appendChild(meta);
      row.appendChild(del);
      return row;
    };

    const loadDashboard = async () => {
      const data = await api('/api/moods?page=1&limit=5');
      todayEntry = data.entries.find((entry) => entry.entry_date === data.today) || null;
      if (todayEntry) {
        selectedMood = todayEntry.mood;
        noteEl.value = todayEntry.note || '';
      }
      noteCountEl.textContent = noteEl.value.length + '/150 characters';
      document.getElementById('form-title').textContent =
        todayEntry ? "Update Today's Mood" : 'How are you feeling today?';
      saveBtn.textContent = todayEntry ? 'Update Mood' : 'Log Mood';
      renderMoodRow();

      const recent = document.getElementById('recent-entries');
      recent.innerHTML = '';
      data.entries.forEach((entry) => {
        recent.appendChild(renderEntry(entry, () => deleteEntry(entry)));
      });
      document.getElementById('recent-card').classList.toggle('hidden', data.entries.length === 0);
    };

    const saveMood = async () => {
      if (submitting) {
        return;
      }
      if (!selectedMood) {
        setStatus('Please select a mood', 'error');
        return;
      }
      submitting = true;
      saveBtn.disabled = true;
      setStatus('Saving...', '');
      try {
        const payload = JSON.stringify({ mood: selectedMood, note: noteEl.value });
        if (todayEntry) {
          await api('/api/moods/' + todayEntry.id, { method: 'PUT', body: payload });
          setStatus('Your mood has been updated successfully!', 'ok');
        } else {
          await api('/api/moods', { method: 'POST', body: payload });
          setStatus('Your mood has been logged successfully!', 'ok');
        }
        await loadDashboard();
      } catch (err) {
        setStatus(err.message, 'error');
      } finally {
        submitting = false;
        saveBtn.disabled = false;
      }
    };

    const deleteEntry = async (entry) => {
      try {
        await api('/api/moods/' + entry.id, { method: 'DELETE' });
        setStatus('Mood entry deleted successfully!', 'ok');
        if (todayEntry && todayEntry.id === entry.id) {
          todayEntry = null;
          selectedMood = '';
          noteEl.value = '';
        }
        await loadDashboard();
        if (!document.getElementById('history-pane').classList.contains('hidden')) {
          await loadHistory(historyPage);
        }
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    const loadHistory = async (page) => {
      const data = await api('/api/moods?page=' + page + '&limit=10');
      historyPage = data.currentPage;
      document.getElementById('history-title').textContent =
        'Mood History (' + data.totalCount + ' total)';
      const list = document.getElementById('history-entries');
      list.innerHTML = '';
      data.entries.forEach((entry) => {
        list.appendChild(renderEntry(entry, () => deleteEntry(entry)));
      });
      document.getElementById('page-label').textContent =
        'Page ' + data.currentPage + ' of ' + Math.max(data.totalPages, 1);
      document.getElementById('prev-page').disabled = data.currentPage <= 1;
      document.getElementById('next-page').disabled = data.currentPage >= data.totalPages;
    };

    const renderBarChart = (counts) => {
      const chart = document.getElementById('chart');
      const total = MOODS.reduce((sum, mood) => sum + counts[mood.name], 0);
      if (total === 0) {
        chart.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No data yet</text>';
        return;
      }

      const width = 600;
      const height = 260;
      const paddingX = 44;
      const paddingY = 34;
      const top = 24;
      const max = Math.max(...MOODS.map((mood) => counts[mood.name]), 1);
      const innerWidth = width - paddingX * 2;
      const barWidth = (innerWidth / MOODS.length) * 0.6;
      const scaleY = (height - top - paddingY) / max;

      let grid = '';
      for (let i = 0; i <= max; i += 1) {
        const yPos = height - paddingY - i * scaleY;
        grid += '<line class="chart-grid" x1="' + paddingX + '" y1="' + yPos +
          '" x2="' + (width - paddingX) + '" y2="' + yPos + '" />';
        grid += '<text class="chart-label" x="' + (paddingX - 10) + '" y="' + (yPos + 4) +
          '" text-anchor="end">' + i + '</text>';
      }

      let bars = '';
      MOODS.forEach((mood, index) => {
        const count = counts[mood.name];
        const slot = paddingX + (innerWidth / MOODS.length) * index + innerWidth / MOODS.length / 2;
        const barHeight = count * scaleY;
        bars += '<rect fill="' + mood.color + '" x="' + (slot - barWidth / 2) +
          '" y="' + (height - paddingY - barHeight) + '" width="' + barWidth +
          '" height="' + barHeight + '" rx="6" />';
        bars += '<text class="chart-label" x="' + slot + '" y="' + (height - paddingY + 18) +
          '" text-anchor="middle">' + mood.face + ' ' + mood.name + '</text>';
      });

      chart.innerHTML = grid + bars;
    };

    const loadAnalytics = async () => {
      const data = await api('/api/moods/analytics');
      const counts = data.moodCounts;
      renderBarChart(counts);

      const total = MOODS.reduce((sum, mood) => sum + counts[mood.name], 0);
      document.getElementById('total-days').textContent = total;

      let common = null;
      let best = 0;
      MOODS.forEach((mood) => {
        if (counts[mood.name] > best) {
          best = counts[mood.name];
          common = mood.name;
        }
      });
      document.getElementById('common-mood').textContent = common || 'N/A';
    };

    const showTab = (tab) => {
      tabs.forEach((button) => {
        button.classList.toggle('active', button.dataset.tab === tab);
      });
      document.getElementById('dashboard-pane').classList.toggle('hidden', tab !== 'dashboard');
      document.getElementById('history-pane').classList.toggle('hidden', tab !== 'history');
      document.getElementById('analytics-pane').classList.toggle('hidden', tab !== 'analytics');
      const load = tab === 'history' ? loadHistory(historyPage)
        : tab === 'analytics' ? loadAnalytics()
        : loadDashboard();
      load.catch((err) => setStatus(err.message, 'error'));
    };

    tabs.forEach((button) => {
      button.addEventListener('click', () => showTab(button.dataset.tab));
    });

    document.getElementById('logout').addEventListener('click', logout);

    document.getElementById('auth-toggle').addEventListener('click', () => {
      registering = !registering;
      document.getElementById('auth-title').textContent = registering ? 'Register' : 'Log in';
      document.getElementById('auth-submit').textContent = registering ? 'Register' : 'Log in';
      document.getElementById('auth-toggle').textContent = registering
        ? 'Have an account? Log in'
        : 'Need an account? Register';
    });

    document.getElementById('auth-submit').addEventListener('click', () => {
      submitAuth().catch((err) => setStatus(err.message, 'error'));
    });

    noteEl.addEventListener('input', () => {
      noteCountEl.textContent = noteEl.value.length + '/150 characters';
    });

    document.getElementById('prev-page').addEventListener('click', () => {
      loadHistory(historyPage - 1).catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('next-page').addEventListener('click', () => {
      loadHistory(historyPage + 1).catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('save-mood').addEventListener('click', saveMood);

    renderMoodRow();
    if (token) {
      showApp();
    }
  </script>
</body>
</html>
"##;

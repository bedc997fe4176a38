pub fn render_index(
    date: &str,
    nickname: &str,
    streak: u32,
    total_excuses: usize,
    unread_count: usize,
) -> String {
    let greeting = if nickname.is_empty() {
        "fellow procrastinator".to_string()
    } else {
        escape_html(nickname)
    };

    INDEX_HTML
        .replace("{{DATE}}", date)
        .replace("{{NICKNAME}}", &greeting)
        .replace("{{STREAK}}", &streak.to_string())
        .replace("{{TOTAL}}", &total_excuses.to_string())
        .replace("{{UNREAD}}", &unread_count.to_string())
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Excuse Generator</title>
  <style>
    :root {
      --bg-1: #1c1530;
      --bg-2: #2b1f4d;
      --ink: #f3eefc;
      --muted: #a79bc4;
      --accent: #a855f7;
      --accent-2: #ec4899;
      --card: #261c42;
      --line: rgba(168, 85, 247, 0.25);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(160deg, var(--bg-1), var(--bg-2));
      color: var(--ink);
      font-family: "Segoe UI", "Helvetica Neue", sans-serif;
      padding: 32px 18px 60px;
      display: flex;
      justify-content: center;
    }

    .app {
      width: min(960px, 100%);
      display: grid;
      gap: 24px;
    }

    header h1 {
      margin: 0 0 4px;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
    }

    header p {
      margin: 0;
      color: var(--muted);
    }

    .cards {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 14px;
    }

    .card {
      background: var(--card);
      border: 1px solid var(--line);
      border-radius: 14px;
      padding: 16px;
    }

    .card .label {
      font-size: 0.78rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: var(--muted);
    }

    .card .value {
      font-size: 1.6rem;
      font-weight: 600;
      margin-top: 6px;
    }

    section {
      background: var(--card);
      border: 1px solid var(--line);
      border-radius: 14px;
      padding: 20px;
    }

    section h2 {
      margin: 0 0 14px;
      font-size: 1.1rem;
    }

    form {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(150px, 1fr));
      gap: 12px;
      align-items: end;
    }

    label {
      display: grid;
      gap: 6px;
      font-size: 0.85rem;
      color: var(--muted);
    }

    select, input {
      background: var(--bg-1);
      color: var(--ink);
      border: 1px solid var(--line);
      border-radius: 8px;
      padding: 10px;
      font-size: 0.95rem;
    }

    button {
      background: linear-gradient(120deg, var(--accent), var(--accent-2));
      color: white;
      border: none;
      border-radius: 8px;
      padding: 11px 16px;
      font-size: 0.95rem;
      cursor: pointer;
    }

    button.ghost {
      background: transparent;
      border: 1px solid var(--line);
      color: var(--muted);
    }

    .result {
      margin-top: 14px;
      padding: 14px;
      border-radius: 10px;
      background: rgba(168, 85, 247, 0.12);
      display: none;
    }

    .result.error {
      background: rgba(236, 72, 153, 0.15);
      color: #fbb6d7;
    }

    .result .motivation {
      color: var(--muted);
      font-size: 0.9rem;
      margin-top: 8px;
    }

    ul {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 10px;
    }

    li {
      border: 1px solid var(--line);
      border-radius: 10px;
      padding: 12px;
      display: flex;
      justify-content: space-between;
      gap: 12px;
      align-items: center;
    }

    li .meta {
      color: var(--muted);
      font-size: 0.8rem;
      margin-top: 4px;
    }

    li.unread {
      border-color: var(--accent);
    }

    .empty {
      color: var(--muted);
      font-size: 0.9rem;
    }

    .row {
      display: flex;
      gap: 10px;
      margin-bottom: 14px;
    }

    .row input {
      flex: 1;
    }
  </style>
</head>
<body>
  <div class="app">
    <header>
      <h1>Excuse Generator</h1>
      <p>Hello, {{NICKNAME}} &middot; {{DATE}}</p>
    </header>

    <div class="cards">
      <div class="card"><div class="label">Current streak</div><div class="value" id="streak">{{STREAK}}</div></div>
      <div class="card"><div class="label">Total excuses</div><div class="value" id="total">{{TOTAL}}</div></div>
      <div class="card"><div class="label">Unread notifications</div><div class="value" id="unread">{{UNREAD}}</div></div>
    </div>

    <section>
      <h2>Skip a workout</h2>
      <form id="generate-form">
        <label>Workout
          <select name="workout_type">
            <option>running</option>
            <option>weightlifting</option>
            <option>yoga</option>
            <option>swimming</option>
            <option>cycling</option>
            <option>HIIT</option>
          </select>
        </label>
        <label>Duration (minutes)
          <input type="number" name="duration" value="30" min="1" max="180" />
        </label>
        <label>Intensity
          <select name="intensity">
            <option>light</option>
            <option selected>moderate</option>
            <option>intense</option>
          </select>
        </label>
        <button type="submit">Generate excuse</button>
      </form>
      <div class="result" id="result"></div>
    </section>

    <section>
      <h2>History</h2>
      <div class="row">
        <input type="search" id="search-box" placeholder="Search excuses..." />
      </div>
      <ul id="history-list"></ul>
    </section>

    <section>
      <h2>Notifications</h2>
      <div class="row">
        <button class="ghost" id="read-all">Mark all read</button>
        <button class="ghost" id="clear-all">Clear</button>
      </div>
      <ul id="notification-list"></ul>
    </section>

    <section>
      <h2>Achievements</h2>
      <ul id="achievement-list"></ul>
    </section>
  </div>

  <script>
    const resultBox = document.getElementById('result');

    function renderEmpty(list, message) {
      list.innerHTML = '<li class="empty">' + message + '</li>';
    }

    async function refreshHistory(query) {
      const url = query ? '/api/search?q=' + encodeURIComponent(query) : '/api/history';
      const response = await fetch(url);
      const payload = await response.json();
      const entries = query ? payload.results : payload.entries;
      const list = document.getElementById('history-list');
      if (!entries.length) {
        renderEmpty(list, query ? 'No excuses match.' : 'No excuses yet. Generate one!');
        return;
      }
      list.innerHTML = '';
      for (const entry of entries) {
        const item = document.createElement('li');
        const text = document.createElement('div');
        text.textContent = entry.excuse;
        const meta = document.createElement('div');
        meta.className = 'meta';
        meta.textContent = entry.date + ' · ' + entry.workout_type;
        text.appendChild(meta);
        const toggle = document.createElement('button');
        toggle.className = 'ghost';
        toggle.textContent = entry.saved ? '★ Saved' : '☆ Save';
        toggle.addEventListener('click', async () => {
          await fetch('/api/history/toggle-saved', {
            method: 'POST',
            headers: { 'Content-Type': 'application/json' },
            body: JSON.stringify({ date: entry.date, excuse: entry.excuse })
          });
          refreshHistory(document.getElementById('search-box').value.trim());
        });
        item.append(text, toggle);
        list.appendChild(item);
      }
      if (!query) {
        document.getElementById('total').textContent = entries.length;
        document.getElementById('streak').textContent = payload.streak;
      }
    }

    async function refreshNotifications() {
      const response = await fetch('/api/notifications');
      const payload = await response.json();
      document.getElementById('unread').textContent = payload.unread_count;
      const list = document.getElementById('notification-list');
      if (!payload.notifications.length) {
        renderEmpty(list, 'Nothing yet. Milestones will show up here.');
        return;
      }
      list.innerHTML = '';
      for (const notification of payload.notifications) {
        const item = document.createElement('li');
        if (!notification.read) item.classList.add('unread');
        const text = document.createElement('div');
        text.textContent = notification.title;
        const meta = document.createElement('div');
        meta.className = 'meta';
        meta.textContent = notification.message;
        text.appendChild(meta);
        item.appendChild(text);
        if (!notification.read) {
          const markRead = document.createElement('button');
          markRead.className = 'ghost';
          markRead.textContent = 'Mark read';
          markRead.addEventListener('click', async () => {
            await fetch('/api/notifications/' + notification.id + '/read', { method: 'POST' });
            refreshNotifications();
          });
          item.appendChild(markRead);
        }
        list.appendChild(item);
      }
    }

    async function refreshAchievements() {
      const response = await fetch('/api/achievements');
      const payload = await response.json();
      const list = document.getElementById('achievement-list');
      list.innerHTML = '';
      for (const achievement of payload.achievements) {
        const item = document.createElement('li');
        const text = document.createElement('div');
        text.textContent = (achievement.earned ? '✓ ' : '') + achievement.title;
        const meta = document.createElement('div');
        meta.className = 'meta';
        meta.textContent = achievement.description + ' · ' + Math.round(achievement.progress) + '%';
        text.appendChild(meta);
        item.appendChild(text);
        list.appendChild(item);
      }
    }

    document.getElementById('generate-form').addEventListener('submit', async (event) => {
      event.preventDefault();
      const form = new FormData(event.target);
      const response = await fetch('/api/generate-excuse', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify({
          workout_type: form.get('workout_type'),
          duration: Number(form.get('duration')),
          intensity: form.get('intensity')
        })
      });
      const payload = await response.json();
      resultBox.style.display = 'block';
      if (!response.ok) {
        resultBox.classList.add('error');
        resultBox.textContent = payload.error;
        return;
      }
      resultBox.classList.remove('error');
      resultBox.innerHTML = '';
      const excuse = document.createElement('div');
      excuse.textContent = payload.excuse;
      const motivation = document.createElement('div');
      motivation.className = 'motivation';
      motivation.textContent = payload.counter_motivation;
      resultBox.append(excuse, motivation);
      refreshHistory('');
      refreshNotifications();
      refreshAchievements();
    });

    document.getElementById('search-box').addEventListener('input', (event) => {
      refreshHistory(event.target.value.trim());
    });

    document.getElementById('read-all').addEventListener('click', async () => {
      await fetch('/api/notifications/read-all', { method: 'POST' });
      refreshNotifications();
    });

    document.getElementById('clear-all').addEventListener('click', async () => {
      await fetch('/api/notifications', { method: 'DELETE' });
      refreshNotifications();
    });

    refreshHistory('');
    refreshNotifications();
    refreshAchievements();
  </script>
</body>
</html>
"#;

/// Substituted for screenshots that are missing on disk. Inline SVG so the
/// report renders without shipping an extra asset.
pub const PLACEHOLDER_IMAGE: &str = "data:image/svg+xml;charset=utf-8,%3Csvg xmlns='http://www.w3.org/2000/svg' width='320' height='200'%3E%3Crect width='100%25' height='100%25' fill='%23e2e8f0'/%3E%3Ctext x='50%25' y='50%25' fill='%2394a3b8' font-family='sans-serif' font-size='16' text-anchor='middle'%3Eno screenshot%3C/text%3E%3C/svg%3E";

pub const REPORT_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8"/>
  <meta content="width=device-width, initial-scale=1.0" name="viewport"/>
  <title>pagewitness report - page {{ page_number }}</title>
  <style>
    body {
      font-family: -apple-system, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
      margin: 0;
      background: #f8fafc;
      color: #0f172a;
    }
    header, footer {
      padding: 16px 32px;
      background: #ffffff;
      border-bottom: 1px solid #e2e8f0;
    }
    footer {
      border-top: 1px solid #e2e8f0;
      border-bottom: none;
    }
    header h1 {
      margin: 0 0 4px 0;
      font-size: 22px;
    }
    .meta {
      margin: 0 0 8px 0;
      color: #64748b;
      font-size: 13px;
    }
    nav a {
      color: #135bec;
      text-decoration: none;
      padding: 0 4px;
    }
    nav a:hover { text-decoration: underline; }
    main {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(340px, 1fr));
      gap: 20px;
      padding: 24px 32px;
    }
    .entry {
      background: #ffffff;
      border: 1px solid #e2e8f0;
      border-radius: 8px;
      overflow: hidden;
    }
    .entry img {
      display: block;
      width: 100%;
      height: 200px;
      object-fit: cover;
      object-position: top;
      background: #e2e8f0;
    }
    .detail { padding: 12px 16px; }
    .detail h2 {
      margin: 0 0 6px 0;
      font-size: 15px;
      overflow: hidden;
      text-overflow: ellipsis;
      white-space: nowrap;
    }
    .detail p {
      margin: 2px 0;
      font-size: 13px;
      word-break: break-all;
    }
    .detail a { color: #135bec; text-decoration: none; }
    .code {
      display: inline-block;
      padding: 1px 6px;
      border-radius: 4px;
      background: #dcfce7;
      color: #15803d;
      font-weight: 600;
      font-size: 12px;
    }
    .final, .server { color: #64748b; }
  </style>
</head>
<body>
  <header>
    <h1>Capture report</h1>
    <p class="meta">{{ total }} entries &middot; page {{ page_number }}{% if errors_ignored > 0 %} &middot; {{ errors_ignored }} error responses ignored{% endif %}</p>
    <nav>{{ page_prev | safe }}{{ page_index | safe }}{{ page_next | safe }}</nav>
  </header>
  <main>
    {% for shot in screenshots %}
    <section class="entry">
      <a href="{{ shot.url }}"><img src="{{ shot.screenshot_file }}" alt="screenshot of {{ shot.url }}" loading="lazy"/></a>
      <div class="detail">
        <h2>{% if shot.page_title %}{{ shot.page_title }}{% else %}(untitled){% endif %}</h2>
        <p><span class="code">{{ shot.response_code }}</span> <a href="{{ shot.url }}">{{ shot.url }}</a></p>
        {% if shot.final_url and shot.final_url != shot.url %}
        <p class="final">resolved to <a href="{{ shot.final_url }}">{{ shot.final_url }}</a></p>
        {% endif %}
        {% for header in shot.headers %}
        <p class="server">{{ header.Key }}: {{ header.Value }}</p>
        {% endfor %}
      </div>
    </section>
    {% endfor %}
  </main>
  <footer>
    <nav>{{ page_prev | safe }}{{ page_index | safe }}{{ page_next | safe }}</nav>
  </footer>
</body>
</html>
"#;

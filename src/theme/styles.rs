//! Global CSS styles for Content Desk.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SURFACES */
  --page-bg: #f9fafb;
  --panel-bg: #ffffff;
  --border: #e5e7eb;
  --dashed-border: #d1d5db;

  /* ACTIONS */
  --primary: #3b82f6;
  --primary-dark: #2563eb;
  --save: #16a34a;
  --accent: #f97316;

  /* TEXT */
  --text-primary: #111827;
  --text-secondary: #4b5563;
  --text-muted: #6b7280;

  /* SEMANTIC */
  --required: #dc2626;
  --info-bg: #eff6ff;
  --info-border: #bfdbfe;
  --info-text: #1e40af;

  /* Typography */
  --font-sans: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  --radius: 8px;
  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  background: var(--page-bg);
  color: var(--text-primary);
  line-height: 1.5;
}

/* === Page Layout === */
.page {
  max-width: 80rem;
  margin: 0 auto;
  padding: 2rem 1rem;
}

.page-header { margin-bottom: 2rem; }
.page-title { font-size: 1.875rem; font-weight: 700; margin-bottom: 0.5rem; }
.page-subtitle { color: var(--text-secondary); }

.page-nav {
  display: flex;
  gap: 1rem;
  margin-bottom: 1.5rem;
}

.page-nav a {
  color: var(--primary-dark);
  text-decoration: none;
  font-weight: 500;
}

.two-column {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 1.5rem;
}

.stack { display: flex; flex-direction: column; gap: 1rem; }

/* === Cards / Panels === */
.panel {
  background: var(--panel-bg);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
}

.panel-header {
  padding: 1rem 1.25rem;
  border-bottom: 1px solid var(--border);
  display: flex;
  align-items: center;
  gap: 0.5rem;
  font-weight: 600;
}

.panel-body { padding: 1.25rem; }

/* === Buttons === */
button { font-family: inherit; cursor: pointer; }

.btn-primary, .btn-save, .btn-outline, .btn-ghost, .btn-accent {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.5rem 1rem;
  border-radius: 6px;
  font-size: 0.875rem;
  font-weight: 500;
  border: 1px solid transparent;
  transition: background var(--transition-fast), box-shadow var(--transition-fast);
}

.btn-primary { background: var(--primary); color: white; }
.btn-primary:hover { background: var(--primary-dark); }
.btn-save { background: var(--save); color: white; }
.btn-accent { background: var(--accent); color: white; }
.btn-outline { background: white; border-color: var(--border); color: var(--text-primary); }
.btn-outline:hover { background: var(--page-bg); }
.btn-ghost { background: transparent; color: var(--text-secondary); }
.btn-ghost:hover { background: var(--page-bg); }
.btn-sm { padding: 0.25rem 0.625rem; font-size: 0.75rem; }
button:disabled { opacity: 0.5; cursor: not-allowed; }

.button-row { display: flex; flex-wrap: wrap; gap: 0.5rem; }

.icon-btn {
  background: transparent;
  border: none;
  font-size: 1.25rem;
  line-height: 1;
  color: var(--text-muted);
}

/* === Badges === */
.badge {
  display: inline-block;
  padding: 0.125rem 0.5rem;
  border-radius: 9999px;
  font-size: 0.75rem;
  font-weight: 500;
}
.badge-active { background: var(--primary); color: white; }
.badge-muted { background: #f3f4f6; color: var(--text-secondary); }
.ml-auto { margin-left: auto; }

/* === Form Fields === */
.form-field { display: flex; flex-direction: column; gap: 0.375rem; }

.input-label { font-size: 0.875rem; font-weight: 500; }
.input-label--required { color: var(--required); }

.input-field {
  width: 100%;
  padding: 0.5rem 0.75rem;
  border: 1px solid var(--border);
  border-radius: 6px;
  font-family: inherit;
  font-size: 0.875rem;
  background: white;
}

.input-field:focus {
  outline: none;
  border-color: var(--primary);
  box-shadow: 0 0 0 2px rgba(59, 130, 246, 0.25);
}

.textarea { resize: vertical; min-height: 6rem; }

.code-editor {
  font-family: var(--font-mono);
  font-size: 0.8125rem;
  min-height: 300px;
  resize: none;
}

.color-input-row { display: flex; align-items: center; gap: 0.5rem; }
.color-swatch { width: 2.5rem; height: 2.5rem; border: 1px solid var(--dashed-border); border-radius: 4px; }
.color-input { width: 5rem; padding: 0.125rem; height: 2.5rem; }

.checkbox-row { display: flex; align-items: center; gap: 0.5rem; }
.checkbox { width: 1rem; height: 1rem; }
.checkbox-label { font-size: 0.875rem; }
.checkbox-icon { color: var(--primary); }

.field-grid { display: flex; flex-direction: column; gap: 1rem; }

.list-field {
  min-height: 5rem;
  border: 1px solid var(--dashed-border);
  border-radius: 6px;
  padding: 0.5rem;
  display: flex;
  flex-wrap: wrap;
  gap: 0.375rem;
  align-content: flex-start;
}

.list-field-empty { color: var(--text-muted); font-size: 0.8125rem; font-style: italic; }

.group-field {
  border: 2px dashed var(--dashed-border);
  border-radius: var(--radius);
  padding: 1rem;
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 0.75rem;
}

/* === Notes === */
.info-note {
  padding: 0.75rem 1rem;
  background: var(--info-bg);
  border: 1px solid var(--info-border);
  border-radius: 6px;
  color: var(--info-text);
  font-size: 0.875rem;
}

.info-note ul { margin: 0.5rem 0 0 1.25rem; }
.info-note li { margin-bottom: 0.25rem; }

.placeholder-region {
  min-height: 8rem;
  border: 1px solid var(--border);
  border-radius: 6px;
  padding: 1rem;
  background: var(--page-bg);
  color: var(--text-muted);
}

/* === Modal Dialog === */
.modal-overlay {
  position: fixed;
  inset: 0;
  background: rgba(0, 0, 0, 0.45);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 500;
}

.dialog {
  background: white;
  border-radius: 10px;
  max-height: 90vh;
  overflow-y: auto;
  width: 100%;
  box-shadow: 0 20px 40px rgba(0, 0, 0, 0.2);
}

.dialog--wide { max-width: 56rem; }
.dialog--xwide { max-width: 72rem; }

.dialog-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 1.25rem 1.5rem;
  border-bottom: 1px solid var(--border);
}

.dialog-title { font-size: 1.25rem; font-weight: 600; }
.dialog-actions { display: flex; gap: 0.5rem; }
.dialog-body { padding: 1.5rem; }
.dialog-error { color: var(--required); font-size: 0.875rem; margin-bottom: 1rem; }

/* === Tabs === */
.tab-list {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  background: #f3f4f6;
  border-radius: 6px;
  padding: 0.25rem;
  margin-bottom: 1.5rem;
}

.tab {
  background: transparent;
  border: none;
  padding: 0.5rem;
  border-radius: 4px;
  font-weight: 500;
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
}

.tab.active { background: white; box-shadow: 0 1px 2px rgba(0, 0, 0, 0.08); }

.tab-marker {
  background: var(--accent);
  color: white;
  border-radius: 9999px;
  width: 1rem;
  height: 1rem;
  font-size: 0.625rem;
  display: flex;
  align-items: center;
  justify-content: center;
}

.image-slot {
  width: 100%;
  height: 8rem;
  background: #e5e7eb;
  border: 2px dashed var(--dashed-border);
  border-radius: 4px;
  display: flex;
  align-items: center;
  justify-content: center;
  color: var(--text-muted);
  font-size: 1.5rem;
}

/* === Phone Preview === */
.phone {
  width: 20rem;
  height: 24rem;
  background: black;
  border-radius: 1.5rem;
  padding: 1rem;
  margin: 0 auto;
}

.phone-screen {
  width: 100%;
  height: 100%;
  border-radius: 1rem;
  padding: 1rem;
  position: relative;
  display: flex;
  flex-direction: column;
}

.phone-screen--tip { background: #2563eb; }
.phone-screen--card { background: white; align-items: center; justify-content: center; gap: 2rem; }

.tip-card {
  background: white;
  border-radius: var(--radius);
  padding: 1rem;
  margin-top: 2rem;
}

.tip-card h3 { font-size: 1rem; margin-bottom: 0.5rem; }
.tip-card p { color: var(--text-secondary); font-size: 0.875rem; margin-bottom: 1rem; }
.tip-author { display: flex; align-items: center; gap: 0.75rem; }
.tip-avatar { width: 2.5rem; height: 2.5rem; border-radius: 50%; background: #e5e7eb; }
.tip-author-name { font-weight: 500; font-size: 0.875rem; }
.tip-author-tagline { font-size: 0.75rem; color: var(--text-muted); }
.tip-actions { position: absolute; left: 1rem; right: 1rem; bottom: 1rem; display: flex; gap: 0.5rem; }
.tip-actions .btn-primary { flex: 1; justify-content: center; }
.tip-close { position: absolute; top: 1rem; right: 1rem; color: white; }

/* === Content Library === */
.library-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 1.5rem;
}

.entity-row {
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 0.5rem;
  border: 1px solid var(--border);
  border-radius: 6px;
  margin-bottom: 0.5rem;
}

.submission-log { font-family: var(--font-mono); font-size: 0.75rem; white-space: pre-wrap; }

/* === HTML Card Editor === */
.snippet-row {
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 0.5rem;
  border: 1px solid var(--border);
  border-radius: 6px;
}

.snippet-row:hover { background: var(--page-bg); }

.preview-card {
  transition: box-shadow 200ms ease;
  cursor: grab;
  width: 100%;
  max-width: 38rem;
}

.preview-card--dragging {
  cursor: grabbing;
  box-shadow: 0 10px 25px rgba(0, 0, 0, 0.18);
}

.drag-handle { cursor: grab; user-select: none; }
.drag-handle:active { cursor: grabbing; }

.preview-pane {
  min-height: 200px;
  padding: 1rem;
  border: 2px dashed var(--border);
  border-radius: var(--radius);
  background: var(--page-bg);
}

.preview-empty {
  display: flex;
  align-items: center;
  justify-content: center;
  min-height: 168px;
  color: var(--text-muted);
}

.preview-escaped { font-family: var(--font-mono); font-size: 0.8125rem; white-space: pre-wrap; }

.pointer-capture {
  position: fixed;
  inset: 0;
  z-index: 1001;
  cursor: grabbing;
}

.info-row { display: flex; justify-content: space-between; font-size: 0.875rem; margin-bottom: 0.5rem; }
.info-label { color: var(--text-secondary); }
.info-value { font-family: var(--font-mono); }

.notice { font-size: 0.8125rem; color: var(--text-secondary); }
"#;

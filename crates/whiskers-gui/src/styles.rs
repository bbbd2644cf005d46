//! CSS 样式定义
//!
//! 明暗两套配色通过根节点的 `.light` / `.dark` 类切换

/// 全局 CSS 样式
pub const GLOBAL_CSS: &str = r#"
* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

.app {
    --primary: #9333EA;
    --primary-hover: #7E22CE;
    --accent: #FACC15;
    --danger: #FB7185;
    --bg: #F8FAFC;
    --card: #FFFFFF;
    --muted: #F1F5F9;
    --text: #0F172A;
    --text-muted: #64748B;
    --border: #000000;
    --shadow: 6px 6px 0px var(--border);
    --shadow-sm: 4px 4px 0px var(--border);
    --font-main: 'Outfit', 'Inter', sans-serif;

    min-height: 100vh;
    font-family: var(--font-main);
    background-color: var(--bg);
    color: var(--text);
    line-height: 1.5;
    transition: background-color 0.2s ease-in-out, color 0.2s ease-in-out;
}

.app.dark {
    --primary: #C084FC;
    --primary-hover: #A855F7;
    --bg: #0F172A;
    --card: #1E293B;
    --muted: #334155;
    --text: #F1F5F9;
    --text-muted: #94A3B8;
    --border: #020617;
}

.container {
    max-width: 480px;
    margin: 0 auto;
    padding: 24px 16px;
}

.card {
    background: var(--card);
    border: 3px solid var(--border);
    box-shadow: var(--shadow);
    padding: 24px;
    transition: background-color 0.2s ease-in-out;
}

.stack {
    display: flex;
    flex-direction: column;
    gap: 16px;
}

/* Header */
.header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 24px;
}

.logo {
    font-size: 28px;
    font-weight: 900;
    letter-spacing: -1px;
    color: var(--primary);
}

/* Theme Switch */
.theme-switch {
    display: flex;
    align-items: center;
    gap: 8px;
    cursor: pointer;
    position: relative;
}

.theme-switch input {
    position: absolute;
    opacity: 0;
    width: 0;
    height: 0;
}

.switch-track {
    width: 44px;
    height: 24px;
    background: var(--muted);
    border: 2px solid var(--border);
    position: relative;
    transition: background 0.2s;
}

.switch-track::after {
    content: "";
    position: absolute;
    top: 2px;
    left: 2px;
    width: 16px;
    height: 16px;
    background: var(--card);
    border: 2px solid var(--border);
    transition: transform 0.2s;
}

.theme-switch input:checked + .switch-track {
    background: var(--primary);
}

.theme-switch input:checked + .switch-track::after {
    transform: translateX(20px);
}

.theme-icon { font-size: 16px; }

/* Buttons */
.btn {
    font-family: inherit;
    font-weight: 800;
    padding: 12px 24px;
    border: 3px solid var(--border);
    box-shadow: var(--shadow-sm);
    cursor: pointer;
    background: var(--card);
    color: var(--text);
    transition: all 0.1s;
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 10px;
}

.btn:active:not(:disabled) {
    transform: translate(2px, 2px);
    box-shadow: 0px 0px 0px var(--border);
}

.btn:disabled {
    opacity: 0.7;
    cursor: not-allowed;
}

.btn-primary { background: var(--primary); color: white; }
.btn-primary:hover:not(:disabled) { background: var(--primary-hover); }
.btn-danger { background: var(--danger); color: white; }
.btn-outline { background: transparent; }
.btn-icon { padding: 6px 10px; }
.btn-block { width: 100%; }

/* Tooltip */
.tooltip {
    position: relative;
    display: inline-block;
    margin-bottom: 16px;
}

.tooltip-content {
    visibility: hidden;
    opacity: 0;
    position: absolute;
    top: 110%;
    left: 0;
    width: 320px;
    z-index: 10;
    background: var(--card);
    color: var(--text);
    border: 2px solid var(--border);
    box-shadow: var(--shadow-sm);
    padding: 12px;
    font-size: 14px;
    transition: opacity 0.15s;
}

.tooltip:hover .tooltip-content {
    visibility: visible;
    opacity: 1;
}

/* Dropzone */
.dropzone {
    border: 4px dashed var(--border);
    background: var(--muted);
    height: 256px;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    text-align: center;
    cursor: pointer;
    transition: all 0.2s;
}

.dropzone:hover {
    border-style: solid;
}

.dropzone-icon {
    font-size: 32px;
    margin-bottom: 16px;
}

.dropzone-text {
    font-size: 14px;
    color: var(--text-muted);
    margin-bottom: 8px;
}

.dropzone-text .strong { font-weight: 700; }

.dropzone-hint {
    font-size: 12px;
    color: var(--text-muted);
}

.dropzone-error {
    margin-top: 12px;
    font-size: 13px;
    font-weight: 700;
    color: var(--danger);
}

/* Preview */
.preview {
    position: relative;
}

.preview-image {
    width: 100%;
    height: 256px;
    object-fit: cover;
    border: 3px solid var(--border);
    display: block;
}

.preview-discard {
    position: absolute;
    top: 8px;
    right: 8px;
}

/* Result */
.result {
    background: var(--muted);
    border: 3px solid var(--border);
    box-shadow: var(--shadow-sm);
    padding: 16px;
    transition: background-color 0.2s ease-in-out;
}

.result-title {
    font-size: 18px;
    font-weight: 700;
    margin-bottom: 8px;
}

.result-text {
    font-size: 24px;
    font-weight: 900;
    color: var(--primary);
    word-break: break-word;
}

.result.failed .result-text {
    font-size: 16px;
    color: var(--danger);
}

/* Spinner */
@keyframes spin {
    0% { transform: rotate(0deg); }
    100% { transform: rotate(360deg); }
}

.spinner {
    width: 16px;
    height: 16px;
    border: 2px solid white;
    border-bottom-color: transparent;
    border-radius: 50%;
    animation: spin 1s linear infinite;
}
"#;

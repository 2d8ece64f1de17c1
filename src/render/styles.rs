//! Inline stylesheet for the dashboard

pub const STYLESHEET: &str = r##"
:root{--bg:#0a0b0d;--bg2:#0f1114;--bg3:#151719;--panel:#1a1d21;--border:#2a2d32;--border-bright:#3a3d44;--text:#e2e4e8;--text-dim:#6b7280;--text-mid:#9ca3af;--accent:#e8ff47;--accent-dim:rgba(232,255,71,.12);--green:#06d6a0;--critical:#ff4d4d;--major:#ff8c42;--minor:#ffd166;--visual:#4dabf7}
*{margin:0;padding:0;box-sizing:border-box}
body{background:var(--bg);color:var(--text);font-family:'JetBrains Mono',monospace;min-height:100vh;overflow-x:hidden}
body::before{content:'';position:fixed;inset:0;background:repeating-linear-gradient(0deg,transparent,transparent 2px,rgba(0,0,0,.03) 2px,rgba(0,0,0,.03) 4px);pointer-events:none;z-index:1000}

/* ── Header ── */
header{border-bottom:1px solid var(--border);padding:0 40px;display:flex;align-items:center;justify-content:space-between;height:60px;position:sticky;top:0;background:rgba(10,11,13,.95);backdrop-filter:blur(12px);z-index:100}
.header-left{display:flex;align-items:center;gap:20px}
.logo-mark{width:28px;height:28px;border:2px solid var(--accent);display:flex;align-items:center;justify-content:center;font-size:11px;font-weight:700;color:var(--accent);letter-spacing:-.5px}
.header-name{font-family:'Syne',sans-serif;font-weight:800;font-size:14px;letter-spacing:.05em;text-transform:uppercase}
.header-role{font-size:11px;color:var(--text-dim);border-left:1px solid var(--border);padding-left:20px}
.header-right{display:flex;align-items:center;gap:24px}
.header-contact{font-size:11px;color:var(--text-dim);text-decoration:none;transition:color .2s}
.header-contact:hover{color:var(--accent)}
.header-status{font-size:11px;color:var(--green)}
.status-dot{width:6px;height:6px;border-radius:50%;background:var(--green);box-shadow:0 0 8px var(--green);animation:pulse 2s infinite;display:inline-block;margin-right:6px}
@keyframes pulse{0%,100%{opacity:1}50%{opacity:.4}}

/* ── Stats bar ── */
.stats-bar{border-bottom:1px solid var(--border);padding:0 40px;display:flex;align-items:stretch;height:80px;background:var(--bg2)}
.stat-item{display:flex;flex-direction:column;justify-content:center;padding-right:32px;margin-right:32px;border-right:1px solid var(--border)}
.stat-item:last-of-type{border-right:none}
.stat-value{font-family:'Syne',sans-serif;font-weight:800;font-size:26px;color:var(--accent);line-height:1}
.stat-label{font-size:10px;color:var(--text-dim);text-transform:uppercase;letter-spacing:.1em;margin-top:4px}
.open-to-work{margin-left:auto;display:flex;align-items:center;gap:8px;font-size:11px;color:var(--green);font-weight:600;letter-spacing:.08em;text-transform:uppercase}

/* ── Layout + sidebar ── */
.main{display:grid;grid-template-columns:220px 1fr;min-height:calc(100vh - 140px)}
.sidebar{border-right:1px solid var(--border);padding:24px 0;position:sticky;top:60px;height:calc(100vh - 140px);overflow-y:auto;background:var(--bg2)}
.sidebar-section{padding:0 20px;margin-bottom:28px}
.sidebar-label{font-size:9px;text-transform:uppercase;letter-spacing:.15em;color:var(--text-dim);margin-bottom:10px;padding-bottom:6px;border-bottom:1px solid var(--border)}
.filter-btn{display:flex;align-items:center;justify-content:space-between;width:100%;padding:7px 10px;background:none;border:none;border-radius:4px;color:var(--text-mid);font-family:'JetBrains Mono',monospace;font-size:12px;cursor:pointer;transition:all .15s;text-align:left;margin-bottom:2px}
.filter-btn:hover{background:var(--panel);color:var(--text)}
.filter-btn.active{background:var(--accent-dim);color:var(--accent)}
.filter-count{font-size:10px;background:var(--panel);padding:2px 6px;border-radius:10px;color:var(--text-dim)}
.filter-btn.active .filter-count{background:rgba(232,255,71,.2);color:var(--accent)}
.severity-dot{width:8px;height:8px;border-radius:50%;display:inline-block;margin-right:8px}

/* ── Content ── */
.content{padding:28px 36px}
.content-header{display:flex;align-items:center;justify-content:space-between;margin-bottom:20px}
.content-title{font-family:'Syne',sans-serif;font-size:13px;font-weight:700;color:var(--text-dim);text-transform:uppercase;letter-spacing:.1em}
.result-count{font-size:11px;color:var(--text-dim)}
.result-count span{color:var(--accent)}

/* ── Bug cards ── */
.bug-list{display:flex;flex-direction:column;gap:2px}
.bug-card{background:var(--panel);border:1px solid var(--border);border-radius:6px;overflow:hidden;transition:border-color .2s,transform .15s;cursor:pointer;animation:slideIn .3s ease both}
.bug-card:hover{border-color:var(--border-bright);transform:translateX(3px)}
.bug-card.expanded{border-color:var(--accent)}
@keyframes slideIn{from{opacity:0;transform:translateY(8px)}to{opacity:1;transform:translateY(0)}}
.bug-card-header{display:grid;grid-template-columns:36px 130px 1fr 140px 80px;align-items:center;padding:14px 18px;gap:16px}
.bug-id{font-size:10px;color:var(--text-dim);letter-spacing:.05em}
.game-tag{font-size:10px;font-weight:600;padding:3px 8px;border-radius:3px;text-transform:uppercase;letter-spacing:.06em;white-space:nowrap;overflow:hidden;text-overflow:ellipsis}
.bug-title-text{font-size:13px;white-space:nowrap;overflow:hidden;text-overflow:ellipsis}
.bug-type{font-size:10px;color:var(--text-dim);text-align:right;white-space:nowrap}
.severity-badge{font-size:10px;font-weight:700;padding:3px 10px;border-radius:3px;text-align:center;text-transform:uppercase;letter-spacing:.08em;justify-self:end}
.sev-critical{background:rgba(255,77,77,.15);color:var(--critical);border:1px solid rgba(255,77,77,.3)}
.sev-major{background:rgba(255,140,66,.15);color:var(--major);border:1px solid rgba(255,140,66,.3)}
.sev-minor{background:rgba(255,209,102,.15);color:var(--minor);border:1px solid rgba(255,209,102,.3)}
.sev-visual{background:rgba(77,171,247,.15);color:var(--visual);border:1px solid rgba(77,171,247,.3)}
.game-ds3{background:rgba(255,77,77,.1);color:#ff7070}
.game-eldenring{background:rgba(255,215,0,.1);color:#ffd700}
.game-fallout4{background:rgba(144,238,144,.1);color:#90ee90}
.game-fallout76{background:rgba(0,255,127,.1);color:#00c875}
.game-spiderman{background:rgba(255,0,0,.1);color:#ff6b6b}
.game-rdr1{background:rgba(139,90,43,.25);color:#c4965a}
.game-rdr2{background:rgba(160,82,45,.2);color:#d4a96a}
.game-witcher3{background:rgba(255,165,0,.1);color:#ffb347}
.game-wolf{background:rgba(255,140,66,.1);color:#ffaa70}
.game-cp77{background:rgba(252,238,9,.1);color:#fcee09}
.game-default{background:rgba(156,163,175,.1);color:#9ca3af}

/* ── Expanded detail ── */
.bug-detail{display:none;border-top:1px solid var(--border);padding:20px 18px 24px;background:var(--bg3);cursor:default}
.bug-card.expanded .bug-detail{display:block}
.detail-grid{display:grid;grid-template-columns:1fr 1fr;gap:20px;margin-bottom:20px}
.detail-section-title{font-size:9px;text-transform:uppercase;letter-spacing:.15em;color:var(--text-dim);margin-bottom:10px;display:flex;align-items:center;gap:8px}
.detail-section-title::after{content:'';flex:1;height:1px;background:var(--border)}
.repro-steps{list-style:none;display:flex;flex-direction:column;gap:6px}
.repro-step{display:flex;gap:12px;font-size:12px;color:var(--text-mid);line-height:1.5}
.step-num{color:var(--accent);font-weight:700;font-size:10px;min-width:16px;padding-top:2px}
.detail-text{font-size:12px;color:var(--text-mid);line-height:1.7}
.detail-chips{display:flex;flex-wrap:wrap;gap:6px;margin-top:12px}
.chip{font-size:10px;padding:3px 9px;border-radius:2px;background:var(--panel);border:1px solid var(--border);color:var(--text-dim)}

/* ── Video ── */
.video-placeholder{background:var(--bg);border:1px dashed var(--border-bright);border-radius:4px;height:160px;display:flex;flex-direction:column;align-items:center;justify-content:center;gap:8px;color:var(--text-dim);font-size:11px}
.video-placeholder a{color:var(--accent);text-decoration:none;font-size:12px;font-weight:600}
.video-placeholder a:hover{text-decoration:underline}
.video-icon{width:32px;height:32px;border:1.5px solid var(--border-bright);border-radius:50%;display:flex;align-items:center;justify-content:center}
.video-wrapper{position:relative;padding-bottom:56.25%;height:0;overflow:hidden;border-radius:4px}
.video-wrapper iframe{position:absolute;top:0;left:0;width:100%;height:100%;border:0}

/* ── About ── */
.about-panel{margin-top:36px;border:1px solid var(--border);border-radius:6px;overflow:hidden}
.about-header{background:var(--panel);padding:12px 18px;font-size:9px;text-transform:uppercase;letter-spacing:.15em;color:var(--text-dim);border-bottom:1px solid var(--border)}
.about-body{padding:20px 18px;display:grid;grid-template-columns:1fr 1fr 1fr;gap:20px;background:var(--bg3)}
.about-col-title{font-size:10px;text-transform:uppercase;letter-spacing:.1em;color:var(--text-dim);margin-bottom:10px}
.about-col p{font-size:12px;color:var(--text-mid);line-height:1.7}
.skill-list{display:flex;flex-direction:column;gap:4px}
.skill-item{font-size:11px;color:var(--text-mid);display:flex;align-items:center;gap:8px}
.skill-item::before{content:'▸';color:var(--accent);font-size:9px}

/* ── Footer + utility ── */
::-webkit-scrollbar{width:4px;height:4px}
::-webkit-scrollbar-track{background:var(--bg)}
::-webkit-scrollbar-thumb{background:var(--border-bright);border-radius:2px}
footer{border-top:1px solid var(--border);padding:16px 40px;display:flex;align-items:center;justify-content:space-between;font-size:10px;color:var(--text-dim);background:var(--bg2)}
.empty{text-align:center;padding:3rem 1rem;color:var(--text-dim);font-size:12px}
.hidden{display:none!important}
"##;

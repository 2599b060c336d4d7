//! Global CSS styles for Dolphin Guide.
//!
//! Retro terminal aesthetic: black backgrounds, green monospace text.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Backgrounds */
  --void-black: #000000;
  --panel-black: rgba(0, 0, 0, 0.6);
  --card-black: rgba(0, 0, 0, 0.5);

  /* Green scale */
  --green-200: #bbf7d0;
  --green-300: #86efac;
  --green-400: #4ade80;
  --green-500: #22c55e;
  --green-600: #16a34a;
  --green-700: #15803d;
  --green-800: #166534;
  --green-900: #14532d;

  /* Warning */
  --red-400: #f87171;
  --red-500: #ef4444;

  /* Typography */
  --font-tech: 'Share Tech Mono', 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Transitions */
  --transition-fast: 200ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-tech);
  background: var(--void-black);
  color: var(--green-400);
  min-height: 100vh;
}

a {
  color: inherit;
  text-decoration: none;
}

.guide {
  min-height: 100vh;
  background: var(--void-black);
}

/* === Header === */
.site-header {
  position: fixed;
  width: 100%;
  z-index: 50;
  background: rgba(0, 0, 0, 0.85);
  backdrop-filter: blur(12px);
  border-bottom: 1px solid rgba(22, 101, 52, 0.5);
  animation: header-enter 0.5s ease 0.1s both;
}

@keyframes header-enter {
  from {
    opacity: 0;
    transform: translateY(-80px);
  }
  to {
    opacity: 1;
    transform: translateY(0);
  }
}

.site-header-inner {
  max-width: 1280px;
  margin: 0 auto;
  padding: 0.75rem 1.5rem;
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.site-logo {
  display: flex;
  align-items: center;
  gap: 0.625rem;
  cursor: pointer;
  transition: transform var(--transition-fast);
}

.site-logo:hover {
  transform: scale(1.02);
}

.site-logo-icon {
  width: 1.75rem;
  height: 1.75rem;
  border: 1px solid rgba(22, 163, 74, 0.7);
  border-radius: 2px;
  display: flex;
  align-items: center;
  justify-content: center;
  color: var(--green-400);
  transition: border-color var(--transition-fast), color var(--transition-fast);
}

.site-logo:hover .site-logo-icon {
  border-color: var(--green-500);
  color: var(--green-300);
}

.site-title {
  font-size: 1.25rem;
  font-weight: 500;
  color: var(--green-300);
  transition: color var(--transition-fast);
}

.site-logo:hover .site-title {
  color: var(--green-200);
}

.site-title-ext {
  color: var(--green-600);
}

.site-nav ul {
  display: flex;
  gap: 0.5rem;
  list-style: none;
}

.nav-item {
  transition: transform var(--transition-fast);
}

.nav-item:hover {
  transform: scale(1.03);
}

.nav-link {
  display: inline-block;
  padding: 0.375rem 0.75rem;
  border-radius: 2px;
  font-size: 0.875rem;
  color: rgba(74, 222, 128, 0.9);
  transition: color var(--transition-fast), background var(--transition-fast);
}

.nav-link:hover {
  color: var(--green-200);
  background: rgba(22, 101, 52, 0.3);
}

/* === Intro === */
.intro {
  position: relative;
  z-index: 10;
  max-width: 1280px;
  margin: 0 auto;
  padding: 7rem 1.5rem 3rem;
}

.intro-panel {
  max-width: 48rem;
  margin: 0 auto;
  padding: 1.5rem;
  background: var(--panel-black);
  border: 1px solid rgba(21, 128, 61, 0.4);
  border-radius: 2px;
  box-shadow: 0 10px 15px rgba(20, 83, 45, 0.2);
  backdrop-filter: blur(4px);
  animation: rise-in 0.6s ease 0.2s both;
}

.intro-title {
  font-size: 1.5rem;
  font-weight: 600;
  color: var(--green-300);
  margin-bottom: 1rem;
}

.intro-text {
  font-size: 0.875rem;
  line-height: 1.7;
  color: rgba(74, 222, 128, 0.9);
}

.game-title {
  font-style: normal;
  font-weight: 500;
  color: var(--green-200);
}

@keyframes rise-in {
  from {
    opacity: 0;
    transform: translateY(20px);
  }
  to {
    opacity: 1;
    transform: translateY(0);
  }
}

/* === Parallax Sections === */
.sections {
  position: relative;
}

.parallax-section {
  position: relative;
  min-height: 100vh;
  width: 100%;
  overflow: hidden;
  display: flex;
  align-items: center;
  justify-content: center;
}

.parallax-bg {
  position: absolute;
  inset: 0;
  background-size: cover;
  background-position: center;
  background-repeat: no-repeat;
  filter: brightness(0.7) contrast(0.9);
  will-change: transform;
}

.parallax-overlay {
  position: absolute;
  inset: 0;
  background: rgba(0, 0, 0, 0.8);
}

.parallax-content {
  position: relative;
  z-index: 10;
  width: 100%;
  max-width: 64rem;
  margin: 0 auto;
  padding: 4rem 1.5rem;
}

.section-heading {
  margin-bottom: 2.5rem;
  text-align: center;
}

.section-title {
  font-size: 3rem;
  font-weight: 500;
  letter-spacing: 0.025em;
  color: var(--green-300);
  margin-bottom: 0.75rem;
  opacity: 0;
}

.revealed .section-title {
  opacity: 1;
  animation: rise-in 0.5s ease 0.1s both;
}

.section-rule {
  height: 1px;
  width: 80px;
  margin: 0 auto;
  background: rgba(21, 128, 61, 0.6);
}

.parallax-section:not(.revealed) .section-rule {
  width: 0;
}

.revealed .section-rule {
  animation: rule-grow 0.5s ease 0.3s both;
}

@keyframes rule-grow {
  from { width: 0; }
  to { width: 80px; }
}

/* === Step Cards === */
.step-grid {
  display: grid;
  grid-template-columns: repeat(3, minmax(0, 1fr));
  gap: 1.25rem;
}

@media (max-width: 1024px) {
  .step-grid { grid-template-columns: repeat(2, minmax(0, 1fr)); }
}

@media (max-width: 640px) {
  .step-grid { grid-template-columns: 1fr; }
  .site-header-inner { flex-direction: column; gap: 0.75rem; }
  .section-title { font-size: 2.25rem; }
}

.step-card {
  background: var(--card-black);
  border: 1px solid rgba(22, 101, 52, 0.6);
  border-radius: 2px;
  overflow: hidden;
  backdrop-filter: blur(4px);
  transition: border-color var(--transition-normal), transform var(--transition-fast);
}

.parallax-section:not(.revealed) .step-card {
  opacity: 0;
}

.revealed .step-card {
  animation: card-enter 0.4s ease backwards;
}

.step-card:hover {
  border-color: rgba(22, 163, 74, 0.8);
  transform: translateY(-4px);
}

@keyframes card-enter {
  from {
    opacity: 0;
    transform: translateY(50px);
  }
  to {
    opacity: 1;
    transform: translateY(0);
  }
}

.step-card-body {
  padding: 1.25rem;
  display: flex;
  align-items: flex-start;
  gap: 1rem;
}

.step-badge {
  flex-shrink: 0;
  margin-top: 0.25rem;
  width: 1.5rem;
  height: 1.5rem;
  display: flex;
  align-items: center;
  justify-content: center;
  border: 1px solid var(--green-600);
  border-radius: 50%;
  font-size: 0.75rem;
  font-weight: 700;
  color: var(--green-400);
}

.step-badge.warning {
  border-color: var(--red-500);
  color: var(--red-400);
}

.step-title {
  font-size: 1.125rem;
  font-weight: 500;
  color: var(--green-300);
  margin-bottom: 0.375rem;
  transition: color var(--transition-fast);
}

.step-card:hover .step-title {
  color: var(--green-200);
}

.step-description {
  font-size: 0.875rem;
  line-height: 1.6;
  color: rgba(74, 222, 128, 0.8);
}

/* === Footer === */
.site-footer {
  background: var(--void-black);
  padding: 2rem 0;
  border-top: 1px solid rgba(22, 101, 52, 0.5);
  opacity: 0;
}

.site-footer.revealed {
  opacity: 1;
  animation: fade-in 0.8s ease both;
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

.site-footer-inner {
  max-width: 1280px;
  margin: 0 auto;
  padding: 0 1.5rem;
  display: flex;
  justify-content: space-between;
  align-items: center;
  gap: 1.25rem;
}

.footer-title-row {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  margin-bottom: 0.375rem;
}

.footer-icon {
  color: var(--green-500);
}

.footer-title {
  font-size: 1rem;
  font-weight: 500;
  color: var(--green-300);
}

.footer-disclaimer {
  font-size: 0.75rem;
  color: rgba(22, 163, 74, 0.8);
}

.footer-links {
  display: flex;
  align-items: center;
  gap: 1.25rem;
}

.icon-link {
  color: var(--green-500);
  transition: color var(--transition-fast), transform var(--transition-fast);
}

.icon-link:hover {
  color: var(--green-300);
  transform: scale(1.1);
}

.icon-link-glyph {
  display: flex;
}
"#;

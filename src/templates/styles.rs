//! CSS styles for the ocean map interface.

pub const STYLE: &str = r#"
/* Reset and Global Styles */
* {
    box-sizing: border-box;
    margin: 0;
    padding: 0;
}

body {
    font-family: 'Roboto', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
    background: #1a237e;
    color: #fff;
    height: 100vh;
    overflow: hidden;
    line-height: 1.6;
}

/* Header */
header {
    background: rgba(63, 81, 181, 0.95);
    padding: 1.5rem;
    text-align: center;
    box-shadow: 0 4px 6px rgba(0,0,0,0.3);
    backdrop-filter: blur(10px);
    position: relative;
    z-index: 100;
}

header h1 {
    font-size: 2.5rem;
    font-weight: 700;
    text-shadow: 2px 2px 4px rgba(0,0,0,0.3);
    margin-bottom: 0.5rem;
}

header p {
    font-size: 1.1rem;
    opacity: 0.9;
}

a {
    color: #ffeb3b;
    text-decoration: none;
    transition: all 0.3s ease;
}

a:hover {
    color: #fff;
    text-shadow: 0 0 8px rgba(255,255,255,0.5);
}

/* Map Container */
#map-container {
    width: 100%;
    height: calc(100vh - 90px);
    overflow: hidden;
    position: relative;
    background: linear-gradient(135deg, #0d47a1 0%, #1565c0 100%);
    cursor: grab;
}

#map {
    position: absolute;
    width: 10000px;
    height: 10000px;
    background: repeating-linear-gradient(
        45deg,
        #1565c0,
        #1565c0 10px,
        #1976d2 10px,
        #1976d2 20px
    );
    transform-origin: center center;
    transition: transform 0.1s ease-out;
}

/* Islands */
.island {
    position: absolute;
    width: 140px;
    height: 140px;
    background: radial-gradient(circle at 40% 30%, #66bb6a, #43a047 70%);
    border: 4px solid #2e7d32;
    border-radius: 50%;
    cursor: pointer;
    display: flex;
    justify-content: center;
    align-items: center;
    font-weight: 500;
    color: #fff;
    text-shadow: 1px 1px 2px rgba(0,0,0,0.4);
    transition: all 0.3s ease;
    box-shadow: 0 4px 12px rgba(0,0,0,0.4);
    padding: 15px;
    text-align: center;
    font-size: 1.1rem;
    z-index: 10;
}

.island:hover {
    transform: scale(1.1);
    box-shadow: 0 6px 16px rgba(0,0,0,0.5);
}

.island.hidden {
    opacity: 0.6;
    background: radial-gradient(circle at 40% 30%, #9e9e9e, #757575 70%);
    border-color: #616161;
}

/* Hover Info Box */
.info-box {
    position: absolute;
    bottom: 130%;
    left: 50%;
    transform: translateX(-50%) translateY(10px);
    background: rgba(0, 0, 0, 0.95);
    padding: 1rem 1.5rem;
    border-radius: 8px;
    font-size: 0.9rem;
    color: #fff;
    opacity: 0;
    transition: all 0.3s ease;
    white-space: nowrap;
    pointer-events: none;
    box-shadow: 0 4px 12px rgba(0,0,0,0.4);
    border: 1px solid rgba(255,255,255,0.1);
    min-width: 200px;
    z-index: 20;
}

.info-box:after {
    content: "";
    position: absolute;
    top: 100%;
    left: 50%;
    transform: translateX(-50%);
    border: 8px solid transparent;
    border-top-color: rgba(0, 0, 0, 0.95);
}

.island:hover .info-box {
    opacity: 1;
    transform: translateX(-50%) translateY(0);
}

/* Control Panel */
#controls {
    position: fixed;
    bottom: 2rem;
    right: 2rem;
    z-index: 100;
    background: rgba(63, 81, 181, 0.95);
    padding: 1.5rem;
    border-radius: 12px;
    box-shadow: 0 4px 12px rgba(0,0,0,0.3);
    backdrop-filter: blur(10px);
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
}

.control-btn {
    background: #7986cb;
    color: #fff;
    border: none;
    padding: 0.8rem 1.2rem;
    cursor: pointer;
    border-radius: 6px;
    transition: all 0.3s ease;
    font-weight: 500;
    font-size: 1rem;
    text-transform: uppercase;
    letter-spacing: 0.5px;
}

.control-btn:hover {
    background: #5c6bc0;
    transform: translateY(-2px);
    box-shadow: 0 2px 8px rgba(0,0,0,0.2);
}

/* Route Lines */
#route-lines {
    position: absolute;
    top: 0;
    left: 0;
    width: 10000px;
    height: 10000px;
    pointer-events: none;
    z-index: 5;
}

/* Storage Warning Banner */
#storage-warning {
    display: none;
    position: fixed;
    top: 100px;
    left: 50%;
    transform: translateX(-50%);
    background: rgba(255, 152, 0, 0.95);
    color: #1a1a1a;
    padding: 0.8rem 1.5rem;
    border-radius: 8px;
    box-shadow: 0 4px 12px rgba(0,0,0,0.4);
    z-index: 500;
    font-weight: 500;
}

/* Modal */
.modal {
    display: none;
    position: fixed;
    top: 0;
    left: 0;
    width: 100%;
    height: 100%;
    background: rgba(0, 0, 0, 0.5);
    z-index: 1000;
    justify-content: center;
    align-items: center;
}

.modal-content {
    background: rgba(63, 81, 181, 0.98);
    padding: 2rem;
    border-radius: 12px;
    width: 500px;
    max-width: 90%;
}

.modal-content h2 {
    margin-bottom: 1rem;
}

#modal-error {
    display: none;
    background: rgba(244, 67, 54, 0.9);
    color: white;
    padding: 0.6rem 1rem;
    border-radius: 4px;
    margin-bottom: 1rem;
}

/* Authentication Forms */
.auth-wrapper {
    display: flex;
    justify-content: center;
    align-items: center;
    min-height: calc(100vh - 90px);
    padding: 2rem;
    background: linear-gradient(135deg, #0d47a1 0%, #1565c0 100%);
}

.form-box {
    background: rgba(63, 81, 181, 0.95);
    padding: 2rem;
    border-radius: 12px;
    box-shadow: 0 4px 12px rgba(0,0,0,0.3);
    backdrop-filter: blur(10px);
    width: 100%;
    max-width: 400px;
}

.form-box h2 {
    color: #fff;
    margin-bottom: 1.5rem;
    text-align: center;
    font-size: 1.8rem;
}

.error {
    background: rgba(244, 67, 54, 0.9);
    color: white;
    padding: 1rem;
    border-radius: 4px;
    margin-bottom: 1rem;
    text-align: center;
}

.form-group {
    margin-bottom: 1.5rem;
}

.form-group label {
    display: block;
    margin-bottom: 0.5rem;
    font-weight: 500;
}

.form-group input,
.form-group textarea {
    width: 100%;
    padding: 0.8rem;
    border: 1px solid rgba(255,255,255,0.2);
    border-radius: 4px;
    background: rgba(255,255,255,0.1);
    color: #fff;
    font-size: 1rem;
    transition: all 0.3s ease;
}

.form-group input:focus,
.form-group textarea:focus {
    background: rgba(255,255,255,0.2);
    outline: none;
    border-color: #ffeb3b;
}

.form-group input[type="checkbox"] {
    width: auto;
    margin-right: 0.5rem;
}

.form-box .control-btn {
    width: 100%;
    margin-bottom: 0.5rem;
}

.switch-form-btn {
    background: transparent;
    border: 2px solid #ffeb3b;
    color: #ffeb3b;
}

.switch-form-btn:hover {
    background: rgba(255, 235, 59, 0.1);
}
"#;

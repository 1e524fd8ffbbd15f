use axum::{
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use rust_embed::Embed;

#[derive(Embed)]
#[folder = "web/dist"]
struct WebAssets;

/// Serve embedded static files from the frontend build
pub async fn serve_static(uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');

    // Try exact path first
    if let Some(content) = <WebAssets as Embed>::get(path) {
        let mime = mime_guess::from_path(path).first_or_octet_stream();
        return (
            StatusCode::OK,
            [(header::CONTENT_TYPE, mime.as_ref())],
            content.data.into_owned(),
        )
            .into_response();
    }

    // For SPA routing, serve index.html for any unmatched route
    if let Some(content) = <WebAssets as Embed>::get("index.html") {
        return Html(String::from_utf8_lossy(&content.data).to_string()).into_response();
    }

    // Fallback: built-in review form when no frontend is built yet
    Html(FALLBACK_HTML.to_string()).into_response()
}

const FALLBACK_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Reelsense</title>
    <style>
        body {
            font-family: 'Arial', sans-serif;
            background-color: #f8f9fa;
            color: #343a40;
            margin: 0;
        }
        .header {
            background-color: #8A2BE2;
            padding: 20px;
            text-align: center;
            color: white;
        }
        .header-title { font-size: 30px; margin: 0; }
        .subtext { font-size: 16px; margin-top: 10px; }
        .container {
            margin: 30px auto;
            max-width: 700px;
            padding: 20px;
            border-radius: 10px;
            box-shadow: 0 4px 8px rgba(0, 0, 0, 0.1);
            background-color: white;
        }
        label { display: block; margin: 16px 0 6px; font-weight: bold; }
        input, select, textarea {
            width: 100%;
            padding: 8px;
            border: 1px solid #ced4da;
            border-radius: 5px;
            box-sizing: border-box;
            font-size: 15px;
        }
        textarea { height: 150px; resize: vertical; }
        button {
            margin-top: 20px;
            background-color: #4CAF50;
            color: white;
            border: none;
            border-radius: 5px;
            font-size: 16px;
            padding: 10px 20px;
            cursor: pointer;
        }
        button:hover { background-color: #45a049; }
        .result { margin-top: 20px; padding: 12px; border-radius: 5px; display: none; }
        .result.positive { background-color: #d4edda; color: #155724; }
        .result.negative { background-color: #fff3cd; color: #856404; }
        .result.error { background-color: #f8d7da; color: #721c24; }
        .footer { text-align: center; margin: 40px 0; font-size: 14px; color: #666; }
    </style>
</head>
<body>
    <div class="header">
        <div class="header-title">Reelsense</div>
        <div class="subtext">Share your thoughts about the movies you've watched and get insights!</div>
    </div>

    <div class="container">
        <label for="watched">When did you watch the movie?</label>
        <select id="watched">
            <option>Less than a week ago</option>
            <option>1-2 weeks ago</option>
            <option>A month ago</option>
            <option>More than a month ago</option>
        </select>

        <label for="movie">What was the movie?</label>
        <input id="movie" type="text" placeholder="Type the movie name (required)">

        <label for="genre">Select the movie genre</label>
        <select id="genre">
            <option>Action</option>
            <option>Comedy</option>
            <option>Romance</option>
            <option>Thriller</option>
            <option>Drama</option>
            <option>Horror</option>
            <option>Sci-Fi</option>
            <option>Fantasy</option>
        </select>

        <label for="review">Your Review</label>
        <textarea id="review" placeholder="Write your review here (required)"></textarea>

        <button id="submit-btn">Submit Review</button>

        <div id="result" class="result"></div>
    </div>

    <div class="footer">Powered by Reelsense</div>

    <script>
        const resultBox = document.getElementById('result');

        function showResult(kind, html) {
            resultBox.className = 'result ' + kind;
            resultBox.style.display = 'block';
            resultBox.innerHTML = html;
        }

        document.getElementById('submit-btn').addEventListener('click', async () => {
            const body = {
                movie: document.getElementById('movie').value,
                review: document.getElementById('review').value,
                genre: document.getElementById('genre').value,
                watched: document.getElementById('watched').value
            };

            try {
                const response = await fetch('/api/reviews', {
                    method: 'POST',
                    headers: { 'Content-Type': 'application/json' },
                    body: JSON.stringify(body)
                });
                const data = await response.json();

                if (!response.ok) {
                    const messages = data.errors || [data.error || 'Something went wrong.'];
                    showResult('error', messages.join('<br>'));
                    return;
                }

                const kind = data.sentiment === 'Positive' ? 'positive' : 'negative';
                showResult(kind,
                    '<strong>Review Submitted Successfully!</strong><br>' +
                    'Sentiment: <strong>' + data.sentiment + '</strong><br>' +
                    'Prediction Score: <strong>' + data.score_display + '</strong>');
            } catch (err) {
                showResult('error', 'Failed to submit review: ' + err.message);
            }
        });
    </script>
</body>
</html>
"#;

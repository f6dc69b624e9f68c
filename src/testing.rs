//! HTML fixtures shared by unit tests.

pub const TURTLE_MOVIE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Turtles of the Jungle</title>
  <meta name="description" content="A 2008 film about jungle turtles.">
  <link rel="canonical" href="http://example.com">
  <meta name="DC.title" content="Turtles of the Jungle">
  <link rel="DC.creator" href="http://www.example.com/PhilTheTurtle">
  <meta name="DC.type" content="Image.Moving">
  <meta property="video:director" content="http://www.example.com/TooEarly">
  <meta property="og:locale" content="en_US">
  <meta property="og:type" content="video.movie">
  <meta property="og:title" content="Turtles of the Jungle">
  <meta property="og:description" content="A 2008 film about jungle turtles.">
  <meta property="og:url" content="http://example.com">
  <meta property="og:site_name" content="Awesome Turtle Movies Website">
  <meta property="og:image" content="http://example.com/turtle.jpg">
  <meta property="og:image" content="http://example.com/shell.jpg">
  <meta property="og:description" content="">
  <meta property="video:tag" content="turtle">
  <meta property="video:tag" content="movie">
  <meta property="video:tag" content="awesome">
  <meta property="video:director" content="http://www.example.com/PhilTheTurtle">
  <meta property="video:actor" content="http://www.example.com/PatTheTurtle">
  <meta property="video:actor" content="http://www.example.com/SaminaTheTurtle">
  <meta property="video:writer" content="http://www.example.com/TinaTheTurtle">
  <meta property="video:release_date" content="2015-01-14T19:14:27+00:00">
  <meta property="video:duration" content="1000000">
</head>
<body><h1>Turtles of the Jungle</h1></body>
</html>"#;

pub const TURTLE_ARTICLE: &str = r#"<!DOCTYPE html>
<html lang="en" dir="ltr">
<head>
  <meta charset="utf-8">
  <title>Turtles are AWESOME!!1 | Awesome Turtles Website</title>
  <meta name="author" content="Turtle Lvr">
  <link rel="author" href="http://examples.com/turtlelvr">
  <link rel="canonical" href="http://example.com/turtles">
  <meta name="description" content="Exposition on the awesomeness of turtles">
  <link rel="publisher" href="https://plus.google.com/1234567">
  <meta name="robots" content="index, follow">
  <link rel="shortlink" href="http://example.com/c">
  <link rel="apple-touch-icon" href="http://example.com/turtle.png">
  <link rel="icon" sizes="16x16" type="image/png" href="http://example.com/favicon.png">

  <meta name="DC.title" content="Turtles are AWESOME!!1">
  <link rel="DC.creator" href="http://www.example.com/turtlelvr">
  <meta name="DC.date" content="2012-02-04 12:00:00">
  <meta name="DC.type" content="Text.Article">
  <meta name="DC.language" content="en">

  <meta property="og:title" content="Turtles are AWESOME!!1">
  <meta property="og:type" content="Article">
  <meta property="og:url" content="http://example.com/turtles">
  <meta property="og:image" content="http://example.com/turtle.jpg">
  <meta property="og:image:width" content="1200">
  <meta property="og:description" content="Exposition on the awesomeness of turtles">
  <meta property="article:published_time" content="2012-02-04T12:00:00+00:00">
  <meta property="article:author" content="http://examples.com/turtlelvr">
  <meta property="article:tag" content="turtles">
  <meta property="article:tag" content="shells">

  <meta name="twitter:card" content="summary">
  <meta name="twitter:site" content="@turtlelvr">
  <meta name="twitter:image" content="http://example.com/turtle.jpg">
  <meta name="twitter:image:alt" content="A turtle">

  <meta name="citation_title" content="Turtles are AWESOME!!1">
  <meta name="citation_author" content="Turtle Lvr">
  <meta name="citation_author" content="Shell Enthusiast">
  <meta name="citation_journal_title" content="Turtle Studies">
  <meta name="citation_publication_date" content="2012/02/04">
  <meta name="bepress_citation_series_title" content="Turtle Working Papers">
  <meta name="bepress_citation_author" content="Lvr, Turtle">
  <meta name="eprints.creators_name" content="Lvr, Turtle">
  <meta name="eprints.type" content="Article">
  <meta name="prism.publicationName" content="Turtle Studies">
  <meta name="prism.volume" content="5">

  <script type="application/ld+json">
  {"@context": "https://schema.org", "@type": "Article", "headline": "Turtles are AWESOME!!1", "author": {"@type": "Person", "name": "Turtle Lvr"}}
  </script>
</head>
<body>
  <article itemscope itemtype="https://schema.org/Article">
    <h1 itemprop="headline">Turtles are AWESOME!!1</h1>
    <div itemprop="author" itemscope itemtype="https://schema.org/Person">
      <span itemprop="name">Turtle Lvr</span>
    </div>
    <time itemprop="datePublished" datetime="2012-02-04">February 4</time>
  </article>
  <span class="Z3988" title="ctx_ver=Z39.88-2004&amp;rft_val_fmt=info%3Aofi%2Ffmt%3Akev%3Amtx%3Ajournal&amp;rft.genre=Article&amp;rft.atitle=Turtles+are+AWESOME%211&amp;rft.jtitle=Turtle+Studies&amp;rft.au=Turtle+Lvr"></span>
</body>
</html>"#;

/// Markup that resembles metadata but carries none of it.
pub const TURTLE_ARTICLE_ERRORS: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>   </title>
  <meta name="description" content="">
  <meta name="DCX.title" content="not dublin core">
  <meta property="og" content="bare prefix">
  <meta property="og:title" content="">
  <meta property="video:director" content="no type declared">
  <meta name="twitter:" content="no property">
  <meta name="twitter:app:id:iphone:extra" content="too deep">
  <meta name="citation" content="no underscore">
  <meta name="prism" content="no property">
  <meta name="eprints" content="no dot">
  <script type="application/ld+json">{"@type": broken</script>
</head>
<body>
  <span itemprop="name">orphan property</span>
  <span class="Z3988" title="badkey.atitle=Nope&amp;badkey.au=Nobody"></span>
  <span class="Z3988"></span>
</body>
</html>"#;

/// The same article with vocabulary prefixes written in assorted cases.
pub const TURTLE_ARTICLE_MIXED_CASE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <META NAME="dc.Title" CONTENT="Turtles are AWESOME!!1">
  <meta property="OG:Title" content="Turtles are AWESOME!!1">
  <meta property="Og:TYPE" content="ARTICLE">
  <meta name="TWITTER:CARD" content="summary">
  <meta name="EPrints.Type" content="ARTICLE">
</head>
<body></body>
</html>"#;
